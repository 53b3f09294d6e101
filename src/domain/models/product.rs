use serde::Deserialize;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Prefix of every product detail page path
pub const PRODUCT_PATH_PREFIX: &str = "/product/";

/// Product record handed to the card by its parent view.
///
/// Every field has a serde default: a record with missing fields still loads
/// and renders with blank content instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Product {
    /// Accepts the Mongo-style `_id` key as well
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: Option<Price>,
    #[serde(default)]
    pub img: String,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: impl Into<Price>,
        img: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: Some(price.into()),
            img: img.into(),
        }
    }

    pub fn product_id(&self) -> ProductId {
        ProductId::new(self.id.clone())
    }

    /// Document path of the detail page, with the id percent-escaped
    /// Example: id "a/b" -> "/product/a%2Fb"
    pub fn detail_path(&self) -> String {
        format!("{}{}", PRODUCT_PATH_PREFIX, self.product_id())
    }

    /// `$` followed by the price exactly as it stringifies, or just `$`
    /// when the record carries no price.
    pub fn price_label(&self) -> String {
        match &self.price {
            Some(price) => format!("${price}"),
            None => "$".to_string(),
        }
    }
}

/// Product id as carried in the `/product/:id` path segment.
///
/// `Display` percent-escapes the raw id so reserved characters such as `/`
/// stay inside a single segment. `FromStr` undoes the escaping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&urlencoding::encode(&self.0))
    }
}

impl FromStr for ProductId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Segments that are not valid escaped UTF-8 are kept as typed
        let id = urlencoding::decode(s)
            .map(|decoded| decoded.into_owned())
            .unwrap_or_else(|_| s.to_string());
        Ok(Self(id))
    }
}

/// Price as supplied by the caller. Displayed verbatim, never rounded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(f64),
    Text(String),
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Amount(amount) => f.write_str(&number_text(*amount)),
            Price::Text(text) => f.write_str(text),
        }
    }
}

/// Textual form of a number following JavaScript's `Number#toString`:
/// `-0` prints as `0`, magnitudes from 1e21 up or below 1e-6 use exponent
/// notation with an explicit sign (`1e+21`, `1.5e-7`).
fn number_text(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }

    let exponent = format!("{value:e}");
    match exponent.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => exponent,
    }
}

impl From<f64> for Price {
    fn from(amount: f64) -> Self {
        Price::Amount(amount)
    }
}

impl From<&str> for Price {
    fn from(text: &str) -> Self {
        Price::Text(text.to_string())
    }
}

impl From<String> for Price {
    fn from(text: String) -> Self {
        Price::Text(text)
    }
}

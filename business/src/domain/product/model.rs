use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ProductError;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied product fields, exactly as they arrived.
///
/// Any of them may be absent; [`ProductFields::validate`] decides whether
/// the set is usable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewProductProps {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
}

/// The three mutable fields of a product, all present.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub price: f64,
    pub image: String,
}

impl ProductFields {
    /// Checks that name, price and image are all provided.
    ///
    /// Blank text counts as missing. A zero price counts as missing too, so
    /// clients that send `0` for an empty price input are rejected the same
    /// way as clients that omit the field.
    pub fn validate(props: NewProductProps) -> Result<Self, ProductError> {
        let name = props.name.filter(|name| !name.trim().is_empty());
        let price = props.price.filter(|price| *price != 0.0 && !price.is_nan());
        let image = props.image.filter(|image| !image.trim().is_empty());

        match (name, price, image) {
            (Some(name), Some(price), Some(image)) => Ok(Self { name, price, image }),
            _ => Err(ProductError::MissingFields),
        }
    }
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        let fields = ProductFields::validate(props)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: fields.name,
            price: fields.price,
            image: fields.image,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        price: f64,
        image: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            price,
            image,
            created_at,
            updated_at,
        }
    }

    /// Replaces the mutable fields and bumps `updated_at`.
    pub fn apply(&mut self, fields: ProductFields) {
        self.name = fields.name;
        self.price = fields.price;
        self.image = fields.image;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(name: Option<&str>, price: Option<f64>, image: Option<&str>) -> NewProductProps {
        NewProductProps {
            name: name.map(str::to_string),
            price,
            image: image.map(str::to_string),
        }
    }

    #[test]
    fn should_build_product_when_all_fields_present() {
        let product = Product::new(props(Some("Pen"), Some(1.5), Some("http://x/p.png"))).unwrap();

        assert_eq!(product.name, "Pen");
        assert_eq!(product.price, 1.5);
        assert_eq!(product.image, "http://x/p.png");
        assert_eq!(product.created_at, product.updated_at);
    }

    #[test]
    fn should_reject_when_any_field_is_missing() {
        let cases = [
            props(None, Some(1.5), Some("http://x/p.png")),
            props(Some("Pen"), None, Some("http://x/p.png")),
            props(Some("Pen"), Some(1.5), None),
            props(Some("  "), Some(1.5), Some("http://x/p.png")),
            props(Some("Pen"), Some(1.5), Some("")),
        ];

        for case in cases {
            assert!(matches!(
                ProductFields::validate(case),
                Err(ProductError::MissingFields)
            ));
        }
    }

    #[test]
    fn should_treat_zero_price_as_missing() {
        let result = ProductFields::validate(props(Some("Pen"), Some(0.0), Some("http://x/p.png")));
        assert!(matches!(result, Err(ProductError::MissingFields)));
    }

    #[test]
    fn should_accept_negative_price() {
        let fields =
            ProductFields::validate(props(Some("Refund"), Some(-2.0), Some("http://x/r.png")))
                .unwrap();
        assert_eq!(fields.price, -2.0);
    }

    #[test]
    fn should_replace_fields_and_keep_identity_on_apply() {
        let mut product =
            Product::new(props(Some("Pen"), Some(1.5), Some("http://x/p.png"))).unwrap();
        let id = product.id;
        let created_at = product.created_at;

        product.apply(ProductFields {
            name: "Pen XL".to_string(),
            price: 2.5,
            image: "http://x/p.png".to_string(),
        });

        assert_eq!(product.id, id);
        assert_eq!(product.created_at, created_at);
        assert_eq!(product.name, "Pen XL");
        assert_eq!(product.price, 2.5);
        assert!(product.updated_at >= created_at);
    }
}

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_IMAGE_FILENAME: &str = "listingimage";
pub const DEFAULT_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1552733407-5d5c46c3bb3b?auto=format&fit=crop&w=800&q=60";

/// Picture attached to a listing. Only the URL is stored, nothing is uploaded.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Image {
    pub filename: String,
    pub url: String,
}

impl Image {
    /// Applies the field defaults, then the url transform.
    pub fn new(filename: Option<String>, url: Option<String>) -> Self {
        Image {
            filename: filename.unwrap_or_else(|| DEFAULT_IMAGE_FILENAME.to_string()),
            url: url.map(normalize_url).unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string()),
        }
    }
}

impl Default for Image {
    fn default() -> Self {
        Image::new(None, None)
    }
}

// An empty url is stored as the placeholder.
fn normalize_url(url: String) -> String {
    if url.is_empty() {
        DEFAULT_IMAGE_URL.to_string()
    } else {
        url
    }
}

/// Image fields as submitted, before defaults are applied.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ImageInput {
    pub filename: Option<String>,
    pub url: Option<String>,
}

impl From<ImageInput> for Image {
    fn from(input: ImageInput) -> Self {
        Image::new(input.filename, input.url)
    }
}

/// The editable fields of a listing, as accepted by the validator.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ListingInput {
    pub title: String,
    pub description: Option<String>,
    pub image: Option<ImageInput>,
    pub price: Option<f64>,
    pub location: Option<String>,
    pub country: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub image: Image,
    pub price: Option<f64>,
    pub location: Option<String>,
    pub country: Option<String>,
    /// Ids of attached reviews, in the order they were added.
    /// The listing does not own these records.
    pub reviews: Vec<String>,
}

impl Listing {
    pub fn new(input: ListingInput) -> Self {
        let mut listing = Listing {
            id: Uuid::new_v4().to_string(),
            title: String::new(),
            description: None,
            image: Image::default(),
            price: None,
            location: None,
            country: None,
            reviews: Vec::new(),
        };
        listing.apply(input);
        listing
    }

    /// Replaces every editable field. `id` and `reviews` are left alone.
    pub fn apply(&mut self, input: ListingInput) {
        self.title = input.title;
        self.description = input.description;
        self.image = input.image.map(Image::from).unwrap_or_default();
        self.price = input.price;
        self.location = input.location;
        self.country = input.country;
    }

    /// Price formatted for display, e.g. `1,200`.
    pub fn price_label(&self) -> String {
        match self.price {
            Some(price) => group_thousands(price),
            None => "-".to_string(),
        }
    }
}

fn group_thousands(price: f64) -> String {
    // Round once so a fraction like .999 carries into the whole part.
    let total_cents = (price * 100.0).round() as i64;
    let whole = total_cents.abs() / 100;
    let cents = total_cents.abs() % 100;

    let digits = whole.to_string();
    let mut out = String::new();
    if total_cents < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if cents > 0 {
        out.push_str(&format!(".{:02}", cents));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_url_becomes_placeholder() {
        let image = Image::new(None, Some(String::new()));
        assert_eq!(image.url, DEFAULT_IMAGE_URL);
        assert_eq!(image.filename, DEFAULT_IMAGE_FILENAME);
    }

    #[test]
    fn given_url_is_kept() {
        let image = Image::from(ImageInput {
            filename: Some("beach".into()),
            url: Some("https://example.com/beach.jpg".into()),
        });
        assert_eq!(image.filename, "beach");
        assert_eq!(image.url, "https://example.com/beach.jpg");
    }

    #[test]
    fn apply_keeps_id_and_reviews() {
        let mut listing = Listing::new(ListingInput {
            title: "Cabin".into(),
            price: Some(100.0),
            ..Default::default()
        });
        listing.reviews.push("r1".into());
        let id = listing.id.clone();

        listing.apply(ListingInput {
            title: "Lake Cabin".into(),
            ..Default::default()
        });

        assert_eq!(listing.id, id);
        assert_eq!(listing.title, "Lake Cabin");
        assert_eq!(listing.price, None);
        assert_eq!(listing.image, Image::default());
        assert_eq!(listing.reviews, vec!["r1".to_string()]);
    }

    #[test]
    fn price_label_groups_thousands() {
        let mut listing = Listing::new(ListingInput {
            title: "Villa".into(),
            price: Some(1_234_567.0),
            ..Default::default()
        });
        assert_eq!(listing.price_label(), "1,234,567");
        listing.price = Some(80.5);
        assert_eq!(listing.price_label(), "80.50");
        listing.price = Some(1.999);
        assert_eq!(listing.price_label(), "2");
        listing.price = Some(0.995);
        assert_eq!(listing.price_label(), "1");
        listing.price = Some(999.999);
        assert_eq!(listing.price_label(), "1,000");
        listing.price = None;
        assert_eq!(listing.price_label(), "-");
    }
}

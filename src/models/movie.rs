use serde::{Deserialize, Deserializer, Serialize};

/// Literal the backend uses for "field not available"
pub const NOT_AVAILABLE: &str = "N/A";

/// One recommended title with its descriptive metadata
///
/// Identity within a result set is the position in the list; the backend
/// sends no stable id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MovieSummary {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub year: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub imdb_rating: String,
    #[serde(default, deserialize_with = "lenient_optional_string")]
    pub poster_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub runtime: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub language: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub genre: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub director: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub actors: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub plot: String,
}

impl MovieSummary {
    /// Creates a summary with only a title and year; every other field empty
    pub fn new(title: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            year: year.into(),
            ..Self::default()
        }
    }

    /// Rating to show on the collapsed card, `None` when the backend sent the
    /// absence sentinel
    pub fn rating(&self) -> Option<&str> {
        present(&self.imdb_rating)
    }

    /// Poster URL worth attempting to load
    pub fn poster(&self) -> Option<&str> {
        self.poster_url.as_deref().and_then(present)
    }
}

fn present(value: &str) -> Option<&str> {
    if value == NOT_AVAILABLE {
        None
    } else {
        Some(value)
    }
}

/// Wire value that may be a string, a number, or null
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl From<Scalar> for String {
    fn from(value: Scalar) -> Self {
        match value {
            Scalar::Text(s) => s,
            Scalar::Integer(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?
        .map(String::from)
        .unwrap_or_default())
}

fn lenient_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(String::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_movie_deserialization() {
        let json = r#"{
            "title": "Die Hard",
            "year": "1988",
            "imdb_rating": "8.2",
            "poster_url": "https://example.com/diehard.jpg",
            "runtime": "132 min",
            "language": "English, German, Italian, Japanese",
            "genre": "Action, Thriller",
            "director": "John McTiernan",
            "actors": "Bruce Willis, Alan Rickman, Bonnie Bedelia",
            "plot": "A New York City police officer tries to save his estranged wife."
        }"#;

        let movie: MovieSummary = serde_json::from_str(json).unwrap();
        assert_eq!(movie.title, "Die Hard");
        assert_eq!(movie.year, "1988");
        assert_eq!(movie.rating(), Some("8.2"));
        assert_eq!(movie.poster(), Some("https://example.com/diehard.jpg"));
        assert_eq!(movie.director, "John McTiernan");
    }

    #[test]
    fn test_numeric_year_and_missing_fields() {
        let movie: MovieSummary =
            serde_json::from_str(r#"{"title": "Heat", "year": 1995, "plot": null}"#).unwrap();
        assert_eq!(movie.year, "1995");
        assert_eq!(movie.plot, "");
        assert_eq!(movie.runtime, "");
        assert_eq!(movie.poster_url, None);
    }

    #[test]
    fn test_sentinel_rating_is_absent() {
        let movie = MovieSummary {
            imdb_rating: NOT_AVAILABLE.to_string(),
            ..MovieSummary::new("Obscure", "2001")
        };
        assert_eq!(movie.rating(), None);
    }

    #[test]
    fn test_sentinel_and_null_poster_are_absent() {
        let sentinel: MovieSummary =
            serde_json::from_str(r#"{"title": "A", "poster_url": "N/A"}"#).unwrap();
        let null: MovieSummary =
            serde_json::from_str(r#"{"title": "B", "poster_url": null}"#).unwrap();
        assert_eq!(sentinel.poster(), None);
        assert_eq!(null.poster(), None);
    }

    #[test]
    fn test_empty_rating_is_not_the_sentinel() {
        let movie = MovieSummary::new("Blank", "1999");
        assert_eq!(movie.rating(), Some(""));
    }
}

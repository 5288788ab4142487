//! Decorative cover images for articles.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

const IMAGE_HOST: &str = "https://picsum.photos/seed";
const CATEGORIES: [&str; 6] = [
    "nature",
    "architecture",
    "technology",
    "travel",
    "food",
    "people",
];

/// Return a cover image URL for the article, picked at random from a fixed
/// category set but stable for a given id.
///
pub fn image_url(article_id: u64) -> String {
    let mut rng = StdRng::seed_from_u64(article_id);
    let category = CATEGORIES.choose(&mut rng).unwrap_or(&CATEGORIES[0]);
    format!("{}/{}-{}/600/300", IMAGE_HOST, category, article_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_is_well_formed() {
        for id in 1..50 {
            let url = image_url(id);
            assert!(url.starts_with("https://"));
            assert!(!url.contains(char::is_whitespace));
            assert!(url.contains(&format!("-{}/", id)));
        }
    }

    #[test]
    fn url_is_stable_per_id() {
        assert_eq!(image_url(7), image_url(7));
    }
}

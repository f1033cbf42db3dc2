//! Built-in default catalog.
//!
//! The seed set the shop ships with, restored by a catalog reset and used
//! as the hydration fallback when no catalog has been persisted yet.

use rust_decimal::Decimal;

use lumaprint_core::{Category, FREE_SAMPLE_ID, Product, ProductId};

fn seed(
    id: &str,
    title: &str,
    description: &str,
    category: Category,
    price_cents: i64,
) -> Product {
    Product {
        id: ProductId::new(id),
        title: title.to_owned(),
        description: description.to_owned(),
        category,
        price: Decimal::new(price_cents, 2),
        is_custom: false,
        image_url: None,
    }
}

/// The built-in default product set.
///
/// Includes the free sample poster (`test-0`), which prices at zero in any
/// format.
#[must_use]
pub fn default_catalog() -> Vec<Product> {
    vec![
        seed(
            FREE_SAMPLE_ID,
            "Échantillon découverte",
            "Un tirage d'essai offert pour juger la qualité d'impression.",
            Category::Films,
            0,
        ),
        seed(
            "film-neon-drive",
            "Neon Drive",
            "Affiche néo-noir inspirée du cinéma rétrowave.",
            Category::Films,
            500,
        ),
        seed(
            "film-odyssee",
            "Odyssée",
            "Monolithe minimaliste sur fond étoilé.",
            Category::Films,
            700,
        ),
        seed(
            "serie-cite-sombre",
            "Cité Sombre",
            "Skyline gothique de la série culte.",
            Category::Series,
            500,
        ),
        seed(
            "serie-labo",
            "Le Labo",
            "Illustration chimie vintage, palette désert.",
            Category::Series,
            600,
        ),
        seed(
            "jeu-pixel-knight",
            "Pixel Knight",
            "Chevalier 8-bit en armure dorée.",
            Category::VideoGames,
            400,
        ),
        seed(
            "jeu-vallee-verte",
            "Vallée Verte",
            "Paysage de ferme paisible au pixel art.",
            Category::VideoGames,
            400,
        ),
        seed(
            "anime-sakura",
            "Sakura",
            "Cerisiers en fleurs sur encre traditionnelle.",
            Category::Anime,
            600,
        ),
        seed(
            "anime-mecha-zero",
            "Mecha Zéro",
            "Armure géante au trait manga des années 90.",
            Category::Anime,
            800,
        ),
    ]
}

use crate::videogame::NewVideogame;

/// The sample records the catalog is seeded with at startup. They receive the ids `0` to `4` in this order.
pub fn startup_records() -> Vec<NewVideogame> {
    [
        ("Killzone", "Sony", 8, 2004),
        ("Horizon", "Sony", 9, 2017),
        ("Super Mario", "Nintendo", 6, 1985),
        ("Metroid", "Nintendo", 7, 1986),
        ("Pokemon", "Nintendo", 8, 1996),
    ]
    .into_iter()
    .map(|(name, publisher, rating, release_year)| NewVideogame {
        name: name.to_string(),
        publisher: publisher.to_string(),
        rating,
        release_year: Some(release_year),
    })
    .collect()
}

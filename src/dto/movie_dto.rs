use serde::Deserialize;
use validator::Validate;

// Query de /api/movies
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MovieQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default = "default_genre")]
    pub genre: String,
    #[serde(default = "default_sort")]
    pub sort: String,
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: i64,
}

fn default_genre() -> String {
    "all".to_string()
}

fn default_sort() -> String {
    "popular".to_string()
}

fn default_page() -> i64 {
    1
}

impl Default for MovieQuery {
    fn default() -> Self {
        Self {
            q: String::new(),
            genre: default_genre(),
            sort: default_sort(),
            page: default_page(),
        }
    }
}

impl MovieQuery {
    /// Clave de cache: los cuatro parámetros tal como llegaron
    pub fn cache_key(&self) -> String {
        format!("{}|{}|{}|{}", self.q, self.genre, self.sort, self.page)
    }

    /// Una query con solo espacios cuenta como vacía
    pub fn is_search(&self) -> bool {
        !self.q.trim().is_empty()
    }

    pub fn genre_filter(&self) -> Option<&str> {
        if self.genre == "all" {
            None
        } else {
            Some(self.genre.as_str())
        }
    }

    pub fn sort_mode(&self) -> SortMode {
        SortMode::parse(&self.sort)
    }
}

// Modo de orden del listado
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    Popular,
    Newest,
    Rating,
}

impl SortMode {
    /// Cualquier valor desconocido cae en Popular
    pub fn parse(value: &str) -> Self {
        match value {
            "newest" => SortMode::Newest,
            "rating" => SortMode::Rating,
            _ => SortMode::Popular,
        }
    }

    /// Expresión `sort_by` de TMDB
    pub fn sort_by(&self) -> &'static str {
        match self {
            SortMode::Popular => "popularity.desc",
            SortMode::Newest => "release_date.desc",
            SortMode::Rating => "vote_average.desc",
        }
    }
}

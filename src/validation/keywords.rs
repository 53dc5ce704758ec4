// Prohibited keyword table.
//
// The table is an ordered list of categories, each with an ordered list of
// lowercase keyword phrases. It is built once at startup and shared
// read-only (Arc) with every request; nothing mutates it.

/// A named group of prohibited phrases.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub name: String,
    pub keywords: Vec<String>,
}

impl Category {
    /// Build a category, lowercasing every keyword so matching against
    /// lowercased content stays case-insensitive.
    pub fn new(name: &str, keywords: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }
}

/// Ordered mapping from category name to keyword phrases.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordTable {
    categories: Vec<Category>,
}

impl KeywordTable {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// The production table. Category order here is the order violations
    /// are reported in.
    pub fn builtin() -> Self {
        Self::new(vec![
            Category::new(
                "gambling",
                &[
                    "casino",
                    "poker",
                    "betting",
                    "slots",
                    "jackpot",
                    "roulette",
                    "blackjack",
                    "wager",
                ],
            ),
            Category::new(
                "cryptocurrency",
                &[
                    "bitcoin",
                    "crypto",
                    "ethereum",
                    "blockchain",
                    "nft",
                    "altcoin",
                    "mining",
                    "defi",
                ],
            ),
            Category::new("adult_content", &["porn", "xxx", "adult", "explicit"]),
            Category::new(
                "medical_claims",
                &[
                    "cure cancer",
                    "treat disease",
                    "fda approved",
                    "medical miracle",
                ],
            ),
            Category::new(
                "financial_advice",
                &[
                    "guaranteed returns",
                    "investment opportunity",
                    "get rich quick",
                ],
            ),
        ])
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total keywords across all categories (duplicates included).
    pub fn keyword_count(&self) -> usize {
        self.categories.iter().map(|c| c.keywords.len()).sum()
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::builtin()
    }
}

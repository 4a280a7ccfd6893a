//! Built-in thematic catalog and synonym thesaurus.
//!
//! Terms are stored lowercased because every lookup runs against lowercased
//! text. The catalog order of `THEMES` is significant: it breaks ties in
//! theme detection (the earlier theme wins).

/// A topic with the canonical keywords that signal it.
#[derive(Debug)]
pub struct Theme {
    pub id: &'static str,
    pub label: &'static str,
    pub keywords: &'static [&'static str],
}

/// Synonyms for one canonical keyword.
#[derive(Debug)]
pub struct SynonymEntry {
    pub keyword: &'static str,
    pub synonyms: &'static [&'static str],
}

// ── Themes ──────────────────────────────────────────────────────────────

pub static THEMES: &[Theme] = &[
    Theme {
        id: "technology",
        label: "Technology",
        keywords: &[
            "technologie", "technology", "innovation", "digital", "informatique", "numérique",
            "électronique", "programmation", "développement", "software", "logiciel", "application",
        ],
    },
    Theme {
        id: "marketing",
        label: "Marketing",
        keywords: &[
            "marketing", "publicité", "promotion", "communication", "stratégie",
            "commercialisation", "seo", "référencement", "optimisation", "contenu",
        ],
    },
    Theme {
        id: "health",
        label: "Health",
        keywords: &[
            "santé", "health", "médecine", "bien-être", "soins", "hygiène", "prévention",
            "médical", "nutrition", "alimentation", "fitness",
        ],
    },
    Theme {
        id: "finance",
        label: "Finance",
        keywords: &[
            "finance", "argent", "investissement", "épargne", "trading", "bourse", "économie",
            "cryptomonnaie", "bitcoin", "blockchain",
        ],
    },
    Theme {
        id: "education",
        label: "Education",
        keywords: &[
            "éducation", "education", "apprentissage", "formation", "enseignement", "pédagogie",
            "études", "cours", "compétences",
        ],
    },
    Theme {
        id: "travel",
        label: "Travel",
        keywords: &[
            "voyage", "travel", "tourisme", "découverte", "destination", "aventure",
            "exploration", "vacances", "déplacement", "expérience",
        ],
    },
    Theme {
        id: "cooking",
        label: "Cooking",
        keywords: &[
            "cuisine", "cooking", "gastronomie", "recette", "recipe", "cuisson", "ingrédients",
            "chef", "restaurant", "préparation", "plat", "saveur",
        ],
    },
    Theme {
        id: "fashion",
        label: "Fashion",
        keywords: &[
            "mode", "fashion", "style", "tendance", "vêtements", "accessoires", "look",
            "élégance", "beauté", "apparence",
        ],
    },
    Theme {
        id: "real_estate",
        label: "Real estate",
        keywords: &[
            "immobilier", "real estate", "propriété", "maison", "appartement", "investissement",
            "achat", "vente", "logement", "habitation",
        ],
    },
    Theme {
        id: "automotive",
        label: "Automotive",
        keywords: &[
            "voiture", "automobile", "véhicule", "conduite", "transport", "moteur", "garage",
            "entretien", "performance",
        ],
    },
];

// ── Synonyms ────────────────────────────────────────────────────────────

pub static SYNONYMS: &[SynonymEntry] = &[
    SynonymEntry {
        keyword: "technologie",
        synonyms: &["tech", "innovation", "digital", "informatique", "numérique", "électronique"],
    },
    SynonymEntry {
        keyword: "technology",
        synonyms: &["tech", "innovation", "digital", "computing", "software", "electronics"],
    },
    SynonymEntry {
        keyword: "programmation",
        synonyms: &["code", "développement", "software", "application", "logiciel", "coding"],
    },
    SynonymEntry {
        keyword: "marketing",
        synonyms: &["publicité", "promotion", "communication", "stratégie", "commercialisation"],
    },
    SynonymEntry {
        keyword: "seo",
        synonyms: &["référencement", "optimisation", "moteurs de recherche", "visibilité", "trafic"],
    },
    SynonymEntry {
        keyword: "contenu",
        synonyms: &["texte", "rédaction", "copywriting", "communication", "message"],
    },
    SynonymEntry {
        keyword: "santé",
        synonyms: &["médecine", "bien-être", "soins", "hygiène", "prévention", "médical"],
    },
    SynonymEntry {
        keyword: "health",
        synonyms: &["wellness", "medicine", "care", "hygiene", "prevention", "medical"],
    },
    SynonymEntry {
        keyword: "nutrition",
        synonyms: &["alimentation", "régime", "diététique", "vitamines", "minéraux", "équilibre"],
    },
    SynonymEntry {
        keyword: "fitness",
        synonyms: &["sport", "exercice", "entraînement", "musculation", "cardio", "forme"],
    },
    SynonymEntry {
        keyword: "finance",
        synonyms: &["argent", "investissement", "épargne", "trading", "bourse", "économie"],
    },
    SynonymEntry {
        keyword: "cryptomonnaie",
        synonyms: &["bitcoin", "blockchain", "crypto", "token", "wallet", "mining"],
    },
    SynonymEntry {
        keyword: "éducation",
        synonyms: &["apprentissage", "formation", "enseignement", "pédagogie", "études", "cours"],
    },
    SynonymEntry {
        keyword: "formation",
        synonyms: &["apprentissage", "développement", "compétences", "expertise", "maîtrise"],
    },
    SynonymEntry {
        keyword: "voyage",
        synonyms: &["tourisme", "découverte", "destination", "aventure", "exploration", "vacances"],
    },
    SynonymEntry {
        keyword: "travel",
        synonyms: &["tourism", "journey", "destination", "adventure", "holiday", "trip"],
    },
    SynonymEntry {
        keyword: "tourisme",
        synonyms: &["voyage", "découverte", "destination", "aventure", "exploration", "vacances"],
    },
    SynonymEntry {
        keyword: "cuisine",
        synonyms: &["gastronomie", "recette", "cuisson", "ingrédients", "chef", "restaurant"],
    },
    SynonymEntry {
        keyword: "recette",
        synonyms: &["cuisine", "gastronomie", "cuisson", "ingrédients", "préparation", "plat"],
    },
    SynonymEntry {
        keyword: "mode",
        synonyms: &["fashion", "style", "tendance", "vêtements", "accessoires", "look"],
    },
    SynonymEntry {
        keyword: "fashion",
        synonyms: &["mode", "style", "tendance", "vêtements", "accessoires", "look"],
    },
    SynonymEntry {
        keyword: "immobilier",
        synonyms: &["propriété", "maison", "appartement", "investissement", "achat", "vente"],
    },
    SynonymEntry {
        keyword: "maison",
        synonyms: &["immobilier", "propriété", "appartement", "logement", "habitation", "résidence"],
    },
    SynonymEntry {
        keyword: "voiture",
        synonyms: &["automobile", "véhicule", "conduite", "transport", "moteur", "garage"],
    },
    SynonymEntry {
        keyword: "automobile",
        synonyms: &["voiture", "véhicule", "conduite", "transport", "moteur", "garage"],
    },
];

/// Synonyms registered for `keyword`, or an empty slice.
pub fn synonyms_of(keyword: &str) -> &'static [&'static str] {
    SYNONYMS
        .iter()
        .find(|entry| entry.keyword == keyword)
        .map(|entry| entry.synonyms)
        .unwrap_or(&[])
}


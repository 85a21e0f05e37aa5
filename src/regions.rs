#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Bd,
    Ind,
    Pk,
    Sg,
    Th,
    Vn,
    My,
    Ph,
    Id,
    Br,
    Mena,
    Ru,
    Us,
    Latam,
    Sa,
}

impl Region {
    pub const ALL: [Region; 15] = [
        Self::Bd,
        Self::Ind,
        Self::Pk,
        Self::Sg,
        Self::Th,
        Self::Vn,
        Self::My,
        Self::Ph,
        Self::Id,
        Self::Br,
        Self::Mena,
        Self::Ru,
        Self::Us,
        Self::Latam,
        Self::Sa,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Bd => "bd",
            Self::Ind => "ind",
            Self::Pk => "pk",
            Self::Sg => "sg",
            Self::Th => "th",
            Self::Vn => "vn",
            Self::My => "my",
            Self::Ph => "ph",
            Self::Id => "id",
            Self::Br => "br",
            Self::Mena => "mena",
            Self::Ru => "ru",
            Self::Us => "us",
            Self::Latam => "latam",
            Self::Sa => "sa",
        }
    }

    pub fn from_code(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.code() == s)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Bd => "Bangladesh",
            Self::Ind => "India",
            Self::Pk => "Pakistan",
            Self::Sg => "Singapore",
            Self::Th => "Thailand",
            Self::Vn => "Vietnam",
            Self::My => "Malaysia",
            Self::Ph => "Philippines",
            Self::Id => "Indonesia",
            Self::Br => "Brazil",
            Self::Mena => "Middle East & North Africa",
            Self::Ru => "Russia",
            Self::Us => "United States",
            Self::Latam => "Latin America",
            Self::Sa => "South Africa",
        }
    }
}

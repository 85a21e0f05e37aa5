use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use super::de;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountInfo {
    #[serde(rename = "AccountName", default, deserialize_with = "de::text")]
    pub name: Option<String>,
    #[serde(rename = "AccountLevel", default, deserialize_with = "de::int")]
    pub level: Option<i64>,
    #[serde(rename = "AccountRegion", default, deserialize_with = "de::text")]
    pub region: Option<String>,
    #[serde(rename = "ReleaseVersion", default, deserialize_with = "de::text")]
    pub release_version: Option<String>,
    #[serde(rename = "AccountSeasonId", default, deserialize_with = "de::int")]
    pub season_id: Option<i64>,
    #[serde(rename = "AccountEXP", default, deserialize_with = "de::int")]
    pub exp: Option<i64>,
    #[serde(rename = "AccountLikes", default, deserialize_with = "de::int")]
    pub likes: Option<i64>,
    #[serde(rename = "AccountCreateTime", default, deserialize_with = "de::int")]
    pub create_time: Option<i64>,
    #[serde(rename = "AccountLastLogin", default, deserialize_with = "de::int")]
    pub last_login: Option<i64>,
    #[serde(rename = "AccountBPBadges", default, deserialize_with = "de::int")]
    pub bp_badges: Option<i64>,
    #[serde(rename = "DiamondCost", default, deserialize_with = "de::int")]
    pub diamond_cost: Option<i64>,
    #[serde(rename = "AccountType", default, deserialize_with = "de::int")]
    pub account_type: Option<i64>,
    #[serde(rename = "AccountAvatarId", default, deserialize_with = "de::id")]
    pub avatar_id: Option<String>,
    #[serde(rename = "AccountBannerId", default, deserialize_with = "de::id")]
    pub banner_id: Option<String>,
    #[serde(rename = "Title", default, deserialize_with = "de::id")]
    pub title_id: Option<String>,
    #[serde(rename = "AccountBPID", default, deserialize_with = "de::id")]
    pub bp_id: Option<String>,
    #[serde(rename = "BrMaxRank", default, deserialize_with = "de::int")]
    pub br_max_rank: Option<i64>,
    #[serde(rename = "BrRankPoint", default, deserialize_with = "de::int")]
    pub br_rank_point: Option<i64>,
    #[serde(rename = "ShowBrRank", default, deserialize_with = "de::flag")]
    pub show_br_rank: Option<bool>,
    #[serde(rename = "CsMaxRank", default, deserialize_with = "de::int")]
    pub cs_max_rank: Option<i64>,
    #[serde(rename = "CsRankPoint", default, deserialize_with = "de::int")]
    pub cs_rank_point: Option<i64>,
    #[serde(rename = "ShowCsRank", default, deserialize_with = "de::flag")]
    pub show_cs_rank: Option<bool>,
}

impl AccountInfo {
    pub fn is_premium(&self) -> bool {
        self.account_type == Some(1)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CaptainInfo {
    #[serde(rename = "EquippedWeapon", default, deserialize_with = "de::id_list")]
    pub equipped_weapons: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileInfo {
    #[serde(rename = "EquippedOutfit", default, deserialize_with = "de::id_list")]
    pub equipped_outfit: Vec<String>,
    #[serde(rename = "EquippedSkills", default, deserialize_with = "de::id_list")]
    pub equipped_skills: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PetInfo {
    #[serde(default, deserialize_with = "de::id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "de::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de::int")]
    pub level: Option<i64>,
    #[serde(default, deserialize_with = "de::int")]
    pub exp: Option<i64>,
    #[serde(rename = "isSelected", default, deserialize_with = "de::flag")]
    pub is_selected: Option<bool>,
    #[serde(rename = "skinId", default, deserialize_with = "de::id")]
    pub skin_id: Option<String>,
    #[serde(rename = "selectedSkillId", default, deserialize_with = "de::id")]
    pub selected_skill_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreditScoreInfo {
    #[serde(rename = "creditScore", default, deserialize_with = "de::int")]
    pub credit_score: Option<i64>,
    #[serde(rename = "rewardState", default, deserialize_with = "de::text")]
    pub reward_state: Option<String>,
    #[serde(rename = "periodicSummaryEndTime", default, deserialize_with = "de::int")]
    pub periodic_summary_end_time: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SocialInfo {
    #[serde(rename = "Gender", default, deserialize_with = "de::text")]
    pub gender: Option<String>,
    #[serde(rename = "AccountLanguage", default, deserialize_with = "de::text")]
    pub language: Option<String>,
    #[serde(rename = "ModePreference", default, deserialize_with = "de::text")]
    pub mode_preference: Option<String>,
    #[serde(rename = "RankDisplay", default, deserialize_with = "de::text")]
    pub rank_display: Option<String>,
    #[serde(rename = "AccountID", default, deserialize_with = "de::id")]
    pub account_id: Option<String>,
    #[serde(rename = "AccountSignature", default, deserialize_with = "de::text")]
    pub signature: Option<String>,
    #[serde(rename = "BattleTags", default, deserialize_with = "de::count")]
    pub battle_tags: Option<i64>,
    #[serde(rename = "BattleTagCount", default, deserialize_with = "de::count")]
    pub battle_tag_count: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GuildInfo {
    #[serde(rename = "GuildName", default, deserialize_with = "de::text")]
    pub name: Option<String>,
    #[serde(rename = "GuildLevel", default, deserialize_with = "de::int")]
    pub level: Option<i64>,
    #[serde(rename = "GuildMember", default, deserialize_with = "de::int")]
    pub members: Option<i64>,
    #[serde(rename = "GuildCapacity", default, deserialize_with = "de::int")]
    pub capacity: Option<i64>,
    #[serde(rename = "GuildID", default, deserialize_with = "de::id")]
    pub id: Option<String>,
    #[serde(rename = "GuildOwner", default, deserialize_with = "de::id")]
    pub owner: Option<String>,
}

/// One account as returned by the player API.
///
/// Every section is independently optional. The raw body is kept alongside
/// the typed sections so it can be served back unchanged.
#[derive(Debug, Clone, Default)]
pub struct PlayerRecord {
    pub raw: Value,
    pub account: Option<AccountInfo>,
    pub captain: Option<CaptainInfo>,
    pub profile: Option<ProfileInfo>,
    pub pet: Option<PetInfo>,
    pub credit_score: Option<CreditScoreInfo>,
    pub social: Option<SocialInfo>,
    pub guild: Option<GuildInfo>,
}

impl PlayerRecord {
    pub fn from_value(raw: Value) -> Self {
        Self {
            account: section(&raw, "AccountInfo"),
            captain: section(&raw, "captainBasicInfo"),
            profile: section(&raw, "AccountProfileInfo"),
            pet: section(&raw, "petInfo"),
            credit_score: section(&raw, "creditScoreInfo"),
            social: section(&raw, "socialinfo"),
            guild: section(&raw, "GuildInfo"),
            raw,
        }
    }

    pub fn equipped_weapons(&self) -> &[String] {
        self.captain
            .as_ref()
            .map(|c| c.equipped_weapons.as_slice())
            .unwrap_or_default()
    }

    pub fn equipped_outfit(&self) -> &[String] {
        self.profile
            .as_ref()
            .map(|p| p.equipped_outfit.as_slice())
            .unwrap_or_default()
    }

    pub fn equipped_skills(&self) -> &[String] {
        self.profile
            .as_ref()
            .map(|p| p.equipped_skills.as_slice())
            .unwrap_or_default()
    }

    /// The guild section only counts when it names a guild.
    pub fn guild(&self) -> Option<&GuildInfo> {
        self.guild
            .as_ref()
            .filter(|g| g.name.as_deref().is_some_and(|n| !n.is_empty()))
    }
}

fn section<T: DeserializeOwned>(raw: &Value, key: &str) -> Option<T> {
    let value = raw.get(key)?;
    if value.is_null() {
        return None;
    }

    match T::deserialize(value) {
        Ok(section) => Some(section),
        Err(e) => {
            tracing::warn!(section = key, error = %e, "ignoring unreadable player record section");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_sections_are_absent() {
        let record = PlayerRecord::from_value(json!({
            "AccountInfo": { "AccountName": "Nep", "AccountLevel": 70 }
        }));

        let account = record.account.as_ref().unwrap();
        assert_eq!(account.name.as_deref(), Some("Nep"));
        assert_eq!(account.level, Some(70));
        assert!(account.avatar_id.is_none());

        assert!(record.pet.is_none());
        assert!(record.guild().is_none());
        assert!(record.credit_score.is_none());
        assert!(record.equipped_weapons().is_empty());
        assert!(record.equipped_skills().is_empty());
    }

    #[test]
    fn non_object_sections_are_absent() {
        let record = PlayerRecord::from_value(json!({
            "AccountInfo": "unavailable",
            "petInfo": null,
            "GuildInfo": 5
        }));

        assert!(record.account.is_none());
        assert!(record.pet.is_none());
        assert!(record.guild.is_none());
    }

    #[test]
    fn odd_id_values_keep_the_section() {
        let record = PlayerRecord::from_value(json!({
            "AccountInfo": {
                "AccountName": "Nep",
                "AccountLevel": 70,
                "AccountAvatarId": {},
                "Title": [904090014]
            },
            "captainBasicInfo": { "EquippedWeapon": [907104822, null, 912000002] },
            "GuildInfo": { "GuildName": "Nep Squad", "GuildID": true }
        }));

        let account = record.account.as_ref().unwrap();
        assert_eq!(account.name.as_deref(), Some("Nep"));
        assert!(account.avatar_id.is_none());
        assert!(account.title_id.is_none());

        // Unreadable entries keep their slot
        assert_eq!(record.equipped_weapons(), ["907104822", "", "912000002"]);

        let guild = record.guild().unwrap();
        assert!(guild.id.is_none());
    }

    #[test]
    fn non_object_body_has_no_sections() {
        let record = PlayerRecord::from_value(json!(["not", "a", "player"]));
        assert!(record.account.is_none());
        assert_eq!(record.raw, json!(["not", "a", "player"]));
    }

    #[test]
    fn reads_string_encoded_fields() {
        let record = PlayerRecord::from_value(json!({
            "AccountInfo": {
                "AccountType": "1",
                "AccountCreateTime": "1704153600",
                "AccountAvatarId": 902000061,
                "ShowBrRank": true
            },
            "captainBasicInfo": { "EquippedWeapon": [907104822, "907104822"] },
            "GuildInfo": { "GuildName": "", "GuildLevel": "3" }
        }));

        let account = record.account.as_ref().unwrap();
        assert!(account.is_premium());
        assert_eq!(account.create_time, Some(1_704_153_600));
        assert_eq!(account.avatar_id.as_deref(), Some("902000061"));
        assert_eq!(account.show_br_rank, Some(true));
        assert_eq!(record.equipped_weapons(), ["907104822", "907104822"]);

        // Present but unnamed
        assert!(record.guild.is_some());
        assert!(record.guild().is_none());
    }
}

use std::fmt::Write as _;

use super::{escape, item_icon};
use crate::format::{
    self, account_type, format_date, format_number, format_year, mode_preference, rank_name,
    rank_progress, reward_state, strip_enum_prefix, toggle_label, Gender,
};
use crate::items::{ItemDetail, ItemSlot};
use crate::lookup::ResolvedProfile;
use crate::player::record::{AccountInfo, CreditScoreInfo, GuildInfo, PetInfo, SocialInfo};

const DASH: &str = "-";

fn num(value: Option<i64>) -> String {
    value.map(format::group_thousands).unwrap_or_else(|| DASH.into())
}

fn text(value: Option<&str>) -> String {
    value.map(|v| escape(v).into_owned()).unwrap_or_else(|| DASH.into())
}

fn date(value: Option<i64>) -> String {
    value.and_then(format_date).unwrap_or_else(|| DASH.into())
}

fn stat(html: &mut String, label: &str, value: &str) {
    let _ = write!(
        html,
        r#"<div class="stat"><div class="value">{value}</div><div class="label">{label}</div></div>"#
    );
}

pub(super) fn render_profile(html: &mut String, profile: &ResolvedProfile, uid: &str, region: &str) {
    let record = &profile.record;

    if let Some(account) = &record.account {
        render_header(html, account, profile);
        render_details(html, account, profile);
        render_ranks(html, account);
    }

    render_items(html, "Equipped Weapons", "fas fa-crosshairs", &profile.weapons, ItemSlot::Weapon);
    render_items(html, "Equipped Outfit", "fas fa-tshirt", &profile.outfit, ItemSlot::Outfit);
    render_items(html, "Equipped Skills", "fas fa-magic", &profile.skills, ItemSlot::Skill);

    if let Some(pet) = &record.pet {
        render_pet(html, pet, profile);
    }
    if let Some(credit) = &record.credit_score {
        render_credit_score(html, credit);
    }
    if let Some(social) = &record.social {
        render_social(html, social);
    }
    if let Some(guild) = record.guild() {
        render_guild(html, guild);
    }

    let _ = write!(
        html,
        r#"<section class="card"><a class="export" href="/api/player?uid={}&amp;region={}"><i class="fas fa-download"></i> Export JSON</a></section>
"#,
        urlencoding::encode(uid),
        urlencoding::encode(region),
    );
}

fn render_header(html: &mut String, account: &AccountInfo, profile: &ResolvedProfile) {
    html.push_str(r#"<section class="card"><div class="profile-head">"#);
    item_icon(html, profile.avatar.as_ref(), ItemSlot::Avatar, "lg");

    let _ = write!(
        html,
        r#"<div><h2>{name}</h2><div class="chips">"#,
        name = text(account.name.as_deref())
    );
    if account.is_premium() {
        html.push_str(r#"<span class="chip premium"><i class="fas fa-crown"></i> Premium</span>"#);
    }
    let _ = write!(
        html,
        r#"<span class="chip"><i class="fas fa-level-up-alt"></i> Level {level}</span><span class="chip"><i class="fas fa-map-marker-alt"></i> {region}</span><span class="chip"><i class="fas fa-gamepad"></i> {version}</span><span class="chip"><i class="fas fa-calendar"></i> Season {season}</span></div></div></div>"#,
        level = num(account.level),
        region = text(account.region.as_deref()),
        version = text(account.release_version.as_deref()),
        season = num(account.season_id),
    );

    html.push_str(r#"<div class="grid">"#);
    stat(html, "Experience", &account.exp.map(format_number).unwrap_or_else(|| DASH.into()));
    stat(html, "Likes", &account.likes.map(format_number).unwrap_or_else(|| DASH.into()));
    stat(
        html,
        "Created",
        &account.create_time.and_then(format_year).unwrap_or_else(|| DASH.into()),
    );
    stat(html, "BP Badges", &num(account.bp_badges));
    stat(html, "Diamonds Spent", &num(account.diamond_cost));
    html.push_str("</div></section>\n");
}

fn render_details(html: &mut String, account: &AccountInfo, profile: &ResolvedProfile) {
    html.push_str(r#"<section class="card"><h2><i class="fas fa-id-card"></i> Account Details</h2><div class="grid">"#);

    stat(html, "Account Type", account_type(account.account_type.unwrap_or_default()));
    detail_item(html, profile.bp_badge.as_ref(), ItemSlot::BpBadge);
    detail_item(html, profile.banner.as_ref(), ItemSlot::Banner);
    detail_item(html, profile.title.as_ref(), ItemSlot::Title);
    stat(html, "Created", &date(account.create_time));
    stat(html, "Last Login", &date(account.last_login));
    stat(html, "Avatar ID", &text(account.avatar_id.as_deref()));
    stat(html, "Season", &format!("Season {}", num(account.season_id)));

    html.push_str("</div></section>\n");
}

fn detail_item(html: &mut String, item: Option<&ItemDetail>, slot: ItemSlot) {
    html.push_str(r#"<div class="stat">"#);
    item_icon(html, item, slot, "sm");
    let _ = write!(
        html,
        r#"<div class="value">{}</div><div class="label">{}</div></div>"#,
        text(item.map(|i| i.id.as_str())),
        slot.label()
    );
}

fn render_ranks(html: &mut String, account: &AccountInfo) {
    html.push_str(r#"<div class="grid">"#);
    rank_card(
        html,
        "Battle Royale",
        account.br_max_rank,
        account.br_rank_point,
        account.show_br_rank,
        format::BR_RANK_POINT_CAP,
    );
    rank_card(
        html,
        "Clash Squad",
        account.cs_max_rank,
        account.cs_rank_point,
        account.show_cs_rank,
        format::CS_RANK_POINT_CAP,
    );
    html.push_str("</div>\n");
}

fn rank_card(
    html: &mut String,
    mode: &str,
    max_rank: Option<i64>,
    points: Option<i64>,
    shown: Option<bool>,
    cap: i64,
) {
    let _ = write!(
        html,
        r#"<section class="card"><h2><i class="fas fa-trophy"></i> {mode}</h2>
<p><span class="rank-badge">{rank}</span> <span class="muted">max rank {code}</span></p>
<p>Rank points: <strong>{points}</strong></p>
<div class="progress"><div class="progress-fill" style="width: {progress:.1}%"></div></div>
<p class="muted">Rank display: {shown}</p></section>"#,
        rank = rank_name(max_rank.unwrap_or_default()),
        code = num(max_rank),
        points = num(points),
        progress = rank_progress(points.unwrap_or_default(), cap),
        shown = toggle_label(shown.unwrap_or_default()),
    );
}

fn render_items(html: &mut String, title: &str, icon: &str, items: &[ItemDetail], slot: ItemSlot) {
    if items.is_empty() {
        return;
    }

    let _ = write!(html, r#"<section class="card"><h2><i class="{icon}"></i> {title}</h2><div class="grid">"#);
    for item in items {
        html.push_str(r#"<div class="item-card">"#);
        item_icon(html, Some(item), slot, "md");
        let _ = write!(
            html,
            "<h4>{}</h4><p>ID: {}</p></div>",
            escape(&item.description),
            escape(&item.id)
        );
    }
    html.push_str("</div></section>\n");
}

fn render_pet(html: &mut String, pet: &PetInfo, profile: &ResolvedProfile) {
    html.push_str(r#"<section class="card"><h2><i class="fas fa-paw"></i> Pet</h2><div class="grid"><div class="stat">"#);
    item_icon(html, profile.pet.as_ref(), ItemSlot::Pet, "md");
    let _ = write!(
        html,
        r#"<div class="value">{}</div><div class="label">Name</div></div>"#,
        text(pet.name.as_deref().or(Some("Pet")))
    );
    stat(html, "Level", &format!("Level {}", num(pet.level)));
    stat(html, "Experience", &num(pet.exp));
    stat(
        html,
        "Status",
        if pet.is_selected.unwrap_or_default() { "Active" } else { "Inactive" },
    );
    detail_item(html, profile.pet_skin.as_ref(), ItemSlot::PetSkin);
    stat(html, "Pet ID", &text(pet.id.as_deref()));
    stat(html, "Selected Skill", &text(pet.selected_skill_id.as_deref()));
    html.push_str("</div></section>\n");
}

fn render_credit_score(html: &mut String, credit: &CreditScoreInfo) {
    html.push_str(r#"<section class="card"><h2><i class="fas fa-shield-alt"></i> Credit Score</h2><div class="grid">"#);
    stat(html, "Score", &num(credit.credit_score));
    stat(html, "Reward", credit.reward_state.as_deref().map(reward_state).unwrap_or(DASH));
    stat(html, "Period Ends", &date(credit.periodic_summary_end_time));
    html.push_str("</div></section>\n");
}

fn render_social(html: &mut String, social: &SocialInfo) {
    html.push_str(r#"<section class="card"><h2><i class="fas fa-users"></i> Social</h2><div class="grid">"#);

    let gender = Gender::from_code(social.gender.as_deref().unwrap_or_default());
    let _ = write!(
        html,
        r#"<div class="stat"><i class="{}"></i><div class="value">{}</div><div class="label">Gender</div></div>"#,
        gender.icon_class(),
        gender.label()
    );
    stat(
        html,
        "Language",
        &text(social.language.as_deref().map(|l| strip_enum_prefix(l, "Language_"))),
    );
    stat(
        html,
        "Preferred Mode",
        social.mode_preference.as_deref().map(mode_preference).unwrap_or(DASH),
    );
    stat(
        html,
        "Rank Display",
        &text(social.rank_display.as_deref().map(|r| strip_enum_prefix(r, "RankShow_"))),
    );
    stat(html, "Account ID", &text(social.account_id.as_deref()));
    stat(html, "Battle Tags", &num(social.battle_tags));
    stat(html, "Battle Tag Count", &num(social.battle_tag_count));
    html.push_str("</div>");

    if let Some(signature) = social.signature.as_deref().filter(|s| !s.is_empty()) {
        let _ = write!(html, r#"<p class="signature">"{}"</p>"#, escape(signature));
    }
    html.push_str("</section>\n");
}

fn render_guild(html: &mut String, guild: &GuildInfo) {
    html.push_str(r#"<section class="card"><h2><i class="fas fa-shield-alt"></i> Guild</h2><div class="grid">"#);
    stat(html, "Name", &text(guild.name.as_deref()));
    stat(html, "Level", &format!("Level {}", num(guild.level)));
    stat(html, "Members", &format!("{}/{}", num(guild.members), num(guild.capacity)));
    stat(html, "Guild ID", &text(guild.id.as_deref()));
    stat(html, "Owner", &text(guild.owner.as_deref()));
    html.push_str("</div></section>\n");
}

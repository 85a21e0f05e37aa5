use crate::global::Global;
use crate::items::{ItemDetail, ItemResolver, ResolutionCache};
use crate::player::{FetchError, PlayerRecord};

/// A player record together with every item it references.
#[derive(Debug, Clone)]
pub struct ResolvedProfile {
    pub record: PlayerRecord,
    pub avatar: Option<ItemDetail>,
    pub banner: Option<ItemDetail>,
    pub title: Option<ItemDetail>,
    pub bp_badge: Option<ItemDetail>,
    pub pet: Option<ItemDetail>,
    pub pet_skin: Option<ItemDetail>,
    pub weapons: Vec<ItemDetail>,
    pub outfit: Vec<ItemDetail>,
    pub skills: Vec<ItemDetail>,
}

impl ResolvedProfile {
    /// Resolve everything `record` points at, sharing one cache across all
    /// slots so an id repeated between sections is probed once.
    pub async fn resolve(resolver: &ItemResolver, record: PlayerRecord) -> Self {
        let mut cache = ResolutionCache::new();

        let account = record.account.as_ref();
        let pet = record.pet.as_ref();

        let avatar = resolve_slot(resolver, &mut cache, account.and_then(|a| a.avatar_id.as_deref())).await;
        let banner = resolve_slot(resolver, &mut cache, account.and_then(|a| a.banner_id.as_deref())).await;
        let title = resolve_slot(resolver, &mut cache, account.and_then(|a| a.title_id.as_deref())).await;
        let bp_badge = resolve_slot(resolver, &mut cache, account.and_then(|a| a.bp_id.as_deref())).await;
        let pet_detail = resolve_slot(resolver, &mut cache, pet.and_then(|p| p.id.as_deref())).await;
        let pet_skin = resolve_slot(resolver, &mut cache, pet.and_then(|p| p.skin_id.as_deref())).await;

        let weapons = resolver.resolve_many(&mut cache, record.equipped_weapons()).await;
        let outfit = resolver.resolve_many(&mut cache, record.equipped_outfit()).await;
        let skills = resolver.resolve_many(&mut cache, record.equipped_skills()).await;

        tracing::debug!(distinct_items = cache.len(), "resolved profile items");

        Self {
            record,
            avatar,
            banner,
            title,
            bp_badge,
            pet: pet_detail,
            pet_skin,
            weapons,
            outfit,
            skills,
        }
    }
}

async fn resolve_slot(
    resolver: &ItemResolver,
    cache: &mut ResolutionCache,
    id: Option<&str>,
) -> Option<ItemDetail> {
    resolver.resolve_cached(cache, id?).await
}

/// Fetch a player and resolve their items for one page render.
#[tracing::instrument(skip(global))]
pub async fn lookup(global: &Global, uid: &str, region: &str) -> Result<ResolvedProfile, FetchError> {
    let record = global.player_api.fetch_player(uid, region).await?;
    Ok(ResolvedProfile::resolve(&global.item_resolver, record).await)
}

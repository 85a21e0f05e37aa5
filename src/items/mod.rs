use std::collections::{HashMap, HashSet};
use std::time::Duration;

use anyhow::Context as _;
use futures_util::future::join_all;
use reqwest::{Client, Url};


/// Display record for one equipped item.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ItemDetail {
    pub id: String,
    pub description: String,
    pub image_url: Option<String>,
}

impl ItemDetail {
    pub fn placeholder(id: &str) -> Self {
        Self {
            id: id.to_string(),
            description: format!("Item #{}", id),
            image_url: None,
        }
    }

    fn with_image(id: &str, url: Url) -> Self {
        Self {
            image_url: Some(url.into()),
            ..Self::placeholder(id)
        }
    }
}

/// Where an item is worn. Picks the fallback icon when there is no image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemSlot {
    Avatar,
    Banner,
    Title,
    BpBadge,
    Pet,
    PetSkin,
    Weapon,
    Outfit,
    Skill,
}

impl ItemSlot {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Avatar => "Avatar",
            Self::Banner => "Banner",
            Self::Title => "Title",
            Self::BpBadge => "BP Badge",
            Self::Pet => "Pet",
            Self::PetSkin => "Pet Skin",
            Self::Weapon => "Weapon",
            Self::Outfit => "Outfit",
            Self::Skill => "Skill",
        }
    }

    pub fn fallback_icon(&self) -> &'static str {
        match self {
            Self::Avatar => "fas fa-user",
            Self::Banner => "fas fa-flag",
            Self::Title => "fas fa-trophy",
            Self::BpBadge => "fas fa-medal",
            Self::Pet => "fas fa-paw",
            Self::PetSkin => "fas fa-palette",
            Self::Weapon => "fas fa-gun",
            Self::Outfit => "fas fa-tshirt",
            Self::Skill => "fas fa-magic",
        }
    }
}

/// Item lookups made during a single page render.
///
/// Owned by the render and dropped with it; icon availability can change
/// between requests, so entries are never carried over.
#[derive(Debug, Default)]
pub struct ResolutionCache {
    entries: HashMap<String, ItemDetail>,
}

impl ResolutionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&ItemDetail> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, detail: ItemDetail) {
        self.entries.insert(detail.id.clone(), detail);
    }
}

/// Resolves item ids against the icon API.
#[derive(Debug, Clone)]
pub struct ItemResolver {
    client: Client,
    base: Url,
    timeout: Duration,
    probe: bool,
}

impl ItemResolver {
    pub fn new(client: Client, base: &str, timeout: Duration, probe: bool) -> anyhow::Result<Self> {
        let base = Url::parse(base).with_context(|| format!("invalid icon api url {base:?}"))?;

        Ok(Self {
            client,
            base,
            timeout,
            probe,
        })
    }

    pub fn icon_url(&self, id: &str) -> Url {
        let mut url = self.base.clone();
        url.query_pairs_mut().append_pair("item_id", id);
        url
    }

    /// `None` means nothing is equipped in the slot. Never fails: an icon the
    /// API cannot serve comes back as a placeholder.
    pub async fn resolve_one(&self, id: &str) -> Option<ItemDetail> {
        if id.is_empty() {
            return None;
        }

        let url = self.icon_url(id);

        if !self.probe {
            return Some(ItemDetail::with_image(id, url));
        }

        match self.client.head(url.clone()).timeout(self.timeout).send().await {
            Ok(resp) if resp.status().is_success() => Some(ItemDetail::with_image(id, url)),
            Ok(resp) => {
                tracing::debug!(item_id = id, status = resp.status().as_u16(), "icon not available");
                Some(ItemDetail::placeholder(id))
            }
            Err(e) => {
                tracing::debug!(item_id = id, error = %e, "icon probe failed");
                Some(ItemDetail::placeholder(id))
            }
        }
    }

    /// One detail per input, in input order. Ids already in `cache` are not
    /// probed again; the remaining distinct ids are probed concurrently and
    /// stored, placeholders included.
    #[tracing::instrument(skip(self, cache, ids), fields(count = ids.len()))]
    pub async fn resolve_many<S: AsRef<str>>(
        &self,
        cache: &mut ResolutionCache,
        ids: &[S],
    ) -> Vec<ItemDetail> {
        let mut seen = HashSet::new();
        let missing: Vec<&str> = ids
            .iter()
            .map(AsRef::as_ref)
            .filter(|id| !id.is_empty() && cache.get(id).is_none() && seen.insert(*id))
            .collect();

        if !missing.is_empty() {
            tracing::debug!(probes = missing.len(), cached = cache.len(), "resolving items");

            let resolved = join_all(missing.iter().map(|id| self.resolve_one(id))).await;
            for (id, detail) in missing.iter().zip(resolved) {
                cache.insert(detail.unwrap_or_else(|| ItemDetail::placeholder(id)));
            }
        }

        ids.iter()
            .map(AsRef::as_ref)
            .map(|id| {
                cache
                    .get(id)
                    .cloned()
                    .unwrap_or_else(|| ItemDetail::placeholder(id))
            })
            .collect()
    }

    /// Single-slot lookup sharing the render's cache.
    pub async fn resolve_cached(&self, cache: &mut ResolutionCache, id: &str) -> Option<ItemDetail> {
        if id.is_empty() {
            return None;
        }

        self.resolve_many(cache, &[id]).await.pop()
    }
}

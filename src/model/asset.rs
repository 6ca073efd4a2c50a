use crate::model::prompt::EntityType;

#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    pub id: u64,
    pub name: String,
    pub kind: EntityType,
}

/// Deletable assets shown by the host, in display order.
#[derive(Debug, Clone, Default)]
pub struct AssetLibrary {
    pub assets: Vec<Asset>,
    next_id: u64,
}

impl AssetLibrary {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, EntityType)>,
        S: Into<String>,
    {
        let mut lib = Self::default();
        for (name, kind) in entries {
            lib.push(name.into(), kind);
        }
        lib
    }

    /// Seed data used when the config lists no assets.
    pub fn demo() -> Self {
        Self::new([
            ("Cat", EntityType::Sprite),
            ("Ball", EntityType::Sprite),
            ("cat-a", EntityType::Costume),
            ("cat-b", EntityType::Costume),
            ("Meow", EntityType::Sound),
            ("Pop", EntityType::Sound),
        ])
    }

    pub fn push(&mut self, name: String, kind: EntityType) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.assets.push(Asset { id, name, kind });
        id
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Asset> {
        self.assets.get(idx)
    }

    pub fn find(&self, id: u64) -> Option<&Asset> {
        self.assets.iter().find(|a| a.id == id)
    }

    pub fn remove(&mut self, id: u64) -> Option<Asset> {
        let idx = self.assets.iter().position(|a| a.id == id)?;
        Some(self.assets.remove(idx))
    }
}

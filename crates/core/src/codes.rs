//! Hardcoded code sets served alongside the database-backed ones.
//!
//! These lists are consumed only by client-side form rendering. The
//! remaining sets (funding sources, investment action categories, first
//! nations, management action types, climate change initiatives) live in
//! seeded reference tables; see `db/migrations`.

use serde::Serialize;

/// One entry of a code set: a stable id and a display name.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CodeEntry {
    pub id: i64,
    pub name: &'static str,
}

const fn entry(id: i64, name: &'static str) -> CodeEntry {
    CodeEntry { id, name }
}

pub const PROJECT_ACTIVITIES: &[CodeEntry] = &[
    entry(1, "Reconnaissance"),
    entry(2, "Monitoring"),
    entry(3, "Habitat Restoration & Enhancement"),
    entry(4, "Habitat Research"),
    entry(5, "Habitat Protection"),
    entry(6, "Salvage"),
    entry(7, "Research"),
];

pub const PROJECT_TYPES: &[CodeEntry] = &[
    entry(1, "Fisheries"),
    entry(2, "Wildlife"),
    entry(3, "Aquatic Habitat"),
    entry(4, "Terrestrial Habitat"),
];

pub const REGIONS: &[CodeEntry] = &[
    entry(1, "West Coast"),
    entry(2, "South Coast"),
    entry(3, "Kootenays"),
    entry(4, "Thompson-Okanagan"),
    entry(5, "Cariboo"),
    entry(6, "Skeena"),
    entry(7, "Omineca"),
    entry(8, "Northeast"),
];

pub const SPECIES: &[CodeEntry] = &[
    entry(1, "Acuteleaf Small Limestone Moss [Seligeria acutifolia]"),
    entry(2, "Alkaline Wing-nerved Moss [Pterygoneurum kozlovii]"),
    entry(3, "American Badger [Taxidea taxus]"),
    entry(4, "American Black Bear [Ursus americanus]"),
    entry(5, "American Coot [Fulica americana]"),
    entry(6, "American White Pelican [Pelecanus erythrorhynchos]"),
    entry(7, "Ancient Murrelet [Synthliboramphus antiquus]"),
    entry(8, "Bald Eagle [Haliaeetus leucocephalus]"),
    entry(9, "Band-tailed Pigeon [Patagioenas fasciata]"),
    entry(10, "Barn Owl [Tyto alba]"),
    entry(11, "Bighorn Sheep [Ovis canadensis]"),
    entry(12, "Burrowing Owl [Athene cunicularia]"),
    entry(13, "Caribou [Rangifer tarandus]"),
    entry(14, "Coastal Giant Salamander [Dicamptodon tenebrosus]"),
    entry(15, "Fisher [Pekania pennanti]"),
    entry(16, "Great Basin Spadefoot [Spea intermontana]"),
    entry(17, "Grizzly Bear [Ursus arctos]"),
    entry(18, "Northern Goshawk [Accipiter gentilis]"),
    entry(19, "Sockeye Salmon [Oncorhynchus nerka]"),
    entry(20, "Vancouver Island Marmot [Marmota vancouverensis]"),
];

use std::collections::HashMap;

/// Target on-wire layout of an encoded artifact.
///
/// The discriminant is the version tag written in the v2 header.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObdVersion {
    Version1 = 100,
    Version2 = 200,
    /// Declared but has no encoder; requesting it is a typed failure.
    Version3 = 300,
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThingCategory {
    #[default]
    Invalid = 0,
    Item = 1,
    Outfit = 2,
    Effect = 3,
    Missile = 4,
}

impl ThingCategory {
    /// Category name written in the v1 header. `Invalid` degrades to an
    /// empty string instead of failing.
    pub fn name(&self) -> &'static str {
        match self {
            ThingCategory::Item => "item",
            ThingCategory::Outfit => "outfit",
            ThingCategory::Effect => "effect",
            ThingCategory::Missile => "missile",
            ThingCategory::Invalid => "",
        }
    }
}

/// Stacking position of an item on a tile. At most one applies per item;
/// exclusivity is the upstream model's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StackOrder {
    #[default]
    None,
    Ground { speed: u16 },
    Border,
    Bottom,
    Top,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Light {
    pub level: u16,
    pub color: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayOffset {
    pub x: u16,
    pub y: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Market {
    pub category: u16,
    pub trade_as: u16,
    pub show_as: u16,
    pub name: String,
    pub restrict_vocation: u16,
    pub restrict_level: u16,
}

/// The capability-flag bag of a thing.
///
/// Flags carrying scalar data are `Option` fields, so a payload can only
/// exist together with its governing flag. The item-only subset is ignored
/// for non-item categories.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ThingType {
    pub category: ThingCategory,
    pub frame_groups: HashMap<FrameGroupType, FrameGroup>,

    // item-only subset
    pub stack_order: StackOrder,
    pub is_container: bool,
    pub stackable: bool,
    pub force_use: bool,
    pub multi_use: bool,
    /// Max text length.
    pub writable: Option<u16>,
    /// Max text length, write-once.
    pub writable_once: Option<u16>,
    pub is_fluid_container: bool,
    pub is_fluid: bool,
    pub unpassable: bool,
    pub unmovable: bool,
    pub block_missiles: bool,
    pub block_pathfinder: bool,
    pub no_move_animation: bool,
    pub pickupable: bool,
    pub hangable: bool,
    pub hook_south: bool,
    pub hook_east: bool,
    pub rotatable: bool,
    pub dont_hide: bool,
    pub translucent: bool,
    pub elevation: Option<u16>,
    pub lying_object: bool,
    pub minimap_color: Option<u16>,
    pub lens_help: Option<u16>,
    pub full_ground: bool,
    pub ignore_look: bool,
    pub cloth_slot: Option<u16>,
    pub market: Option<Market>,
    pub default_action: Option<u16>,
    pub has_charges: bool,
    pub floor_change: bool,
    pub wrappable: bool,
    pub unwrappable: bool,
    pub is_top_effect: bool,
    pub usable: bool,

    // shared subset
    pub light: Option<Light>,
    pub display_offset: Option<DisplayOffset>,
    pub animate_always: bool,
}

/// Rendering context of a frame group. Only `Default` is encoded.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameGroupType {
    Default = 0,
    Walking = 1,
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationMode {
    #[default]
    Asynchronous = 0,
    Synchronous = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameDuration {
    pub minimum: u32,
    pub maximum: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Animation {
    pub mode: AnimationMode,
    /// 0 repeats forever.
    pub loop_count: i32,
    pub start_frame: i8,
    /// One pair per frame of the owning group.
    pub frame_durations: Vec<FrameDuration>,
}

/// Sprite-sheet geometry of one rendering context. Dimensions are in
/// sprite cells, not pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameGroup {
    pub width: u8,
    pub height: u8,
    /// Exact pixel size of the composed area; only on the wire when the
    /// group spans more than one cell.
    pub exact_size: u8,
    pub layers: u8,
    pub pattern_x: u8,
    pub pattern_y: u8,
    pub pattern_z: u8,
    pub frames: u8,
    pub animation: Option<Animation>,
}

impl Default for FrameGroup {
    fn default() -> Self {
        Self {
            width: 1,
            height: 1,
            exact_size: 32,
            layers: 1,
            pattern_x: 1,
            pattern_y: 1,
            pattern_z: 1,
            frames: 1,
            animation: None,
        }
    }
}

impl FrameGroup {
    /// A group with more than one frame carries a timing section in
    /// layouts that support one.
    pub fn is_animation(&self) -> bool {
        self.frames > 1
    }

    /// Number of sprite cells the group references.
    pub fn total_sprites(&self) -> usize {
        self.width as usize
            * self.height as usize
            * self.layers as usize
            * self.pattern_x as usize
            * self.pattern_y as usize
            * self.pattern_z as usize
            * self.frames as usize
    }
}

/// One sprite cell: identifier plus the upstream-decoded ARGB32 pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    pub id: u32,
    pub pixels: Vec<u8>,
}

/// The unit of encoding: a thing description plus the sprites of each of
/// its frame groups. Read-only to the encoder.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ObjectData {
    pub thing_type: ThingType,
    pub sprites: HashMap<FrameGroupType, Vec<Sprite>>,
}

impl ObjectData {
    pub fn category(&self) -> ThingCategory {
        self.thing_type.category
    }
}

/// Client format tag written in the v1 header.
pub const DAT_FORMAT_1010: u16 = 1010;
/// Client format tag written in the v2 header.
pub const DAT_FORMAT_1050: u16 = 1050;

/// Side of one sprite cell in pixels.
pub const SPRITE_SIZE: u32 = 32;
/// Byte length of one decoded ARGB32 sprite cell.
pub const SPRITE_PIXEL_BYTES: u32 = SPRITE_SIZE * SPRITE_SIZE * 4;

/// Flag tags of the legacy (v1) property dialect, the inline flag set of
/// dat format 1010.
///
/// Declaration order here is the canonical emit order. The reader matches
/// the section positionally, so the order is part of the wire contract.
pub mod legacy_flags {
    pub const GROUND: u8 = 0x00;
    pub const GROUND_BORDER: u8 = 0x01;
    pub const ON_BOTTOM: u8 = 0x02;
    pub const ON_TOP: u8 = 0x03;
    pub const CONTAINER: u8 = 0x04;
    pub const STACKABLE: u8 = 0x05;
    pub const FORCE_USE: u8 = 0x06;
    pub const MULTI_USE: u8 = 0x07;
    pub const WRITABLE: u8 = 0x08;
    pub const WRITABLE_ONCE: u8 = 0x09;
    pub const FLUID_CONTAINER: u8 = 0x0A;
    pub const FLUID: u8 = 0x0B;
    pub const UNPASSABLE: u8 = 0x0C;
    pub const UNMOVABLE: u8 = 0x0D;
    pub const BLOCK_MISSILES: u8 = 0x0E;
    pub const BLOCK_PATHFINDER: u8 = 0x0F;
    pub const NO_MOVE_ANIMATION: u8 = 0x10;
    pub const PICKUPABLE: u8 = 0x11;
    pub const HANGABLE: u8 = 0x12;
    pub const HOOK_SOUTH: u8 = 0x13;
    pub const HOOK_EAST: u8 = 0x14;
    pub const ROTATABLE: u8 = 0x15;
    pub const HAS_LIGHT: u8 = 0x16;
    pub const DONT_HIDE: u8 = 0x17;
    pub const TRANSLUCENT: u8 = 0x18;
    pub const HAS_OFFSET: u8 = 0x19;
    pub const HAS_ELEVATION: u8 = 0x1A;
    pub const LYING_OBJECT: u8 = 0x1B;
    pub const ANIMATE_ALWAYS: u8 = 0x1C;
    pub const MINIMAP: u8 = 0x1D;
    pub const LENS_HELP: u8 = 0x1E;
    pub const FULL_GROUND: u8 = 0x1F;
    pub const IGNORE_LOOK: u8 = 0x20;
    pub const CLOTH: u8 = 0x21;
    pub const MARKET: u8 = 0x22;
    pub const DEFAULT_ACTION: u8 = 0x23;
    pub const USABLE: u8 = 0xFE;
    pub const LAST_FLAG: u8 = 0xFF;
}

/// Flag tags of the extended (v2) property dialect. A superset of the
/// legacy table; same ordering contract.
pub mod obd_flags {
    pub const GROUND: u8 = 0x00;
    pub const GROUND_BORDER: u8 = 0x01;
    pub const ON_BOTTOM: u8 = 0x02;
    pub const ON_TOP: u8 = 0x03;
    pub const CONTAINER: u8 = 0x04;
    pub const STACKABLE: u8 = 0x05;
    pub const FORCE_USE: u8 = 0x06;
    pub const MULTI_USE: u8 = 0x07;
    pub const WRITABLE: u8 = 0x08;
    pub const WRITABLE_ONCE: u8 = 0x09;
    pub const FLUID_CONTAINER: u8 = 0x0A;
    pub const FLUID: u8 = 0x0B;
    pub const UNPASSABLE: u8 = 0x0C;
    pub const UNMOVABLE: u8 = 0x0D;
    pub const BLOCK_MISSILES: u8 = 0x0E;
    pub const BLOCK_PATHFINDER: u8 = 0x0F;
    pub const NO_MOVE_ANIMATION: u8 = 0x10;
    pub const PICKUPABLE: u8 = 0x11;
    pub const HANGABLE: u8 = 0x12;
    pub const HOOK_SOUTH: u8 = 0x13;
    pub const HOOK_EAST: u8 = 0x14;
    pub const ROTATABLE: u8 = 0x15;
    pub const HAS_LIGHT: u8 = 0x16;
    pub const DONT_HIDE: u8 = 0x17;
    pub const TRANSLUCENT: u8 = 0x18;
    pub const HAS_OFFSET: u8 = 0x19;
    pub const HAS_ELEVATION: u8 = 0x1A;
    pub const LYING_OBJECT: u8 = 0x1B;
    pub const ANIMATE_ALWAYS: u8 = 0x1C;
    pub const MINIMAP: u8 = 0x1D;
    pub const LENS_HELP: u8 = 0x1E;
    pub const FULL_GROUND: u8 = 0x1F;
    pub const IGNORE_LOOK: u8 = 0x20;
    pub const CLOTH: u8 = 0x21;
    pub const MARKET: u8 = 0x22;
    pub const DEFAULT_ACTION: u8 = 0x23;
    pub const WRAPPABLE: u8 = 0x24;
    pub const UNWRAPPABLE: u8 = 0x25;
    pub const TOP_EFFECT: u8 = 0x26;
    pub const HAS_CHARGES: u8 = 0xFC;
    pub const FLOOR_CHANGE: u8 = 0xFD;
    pub const USABLE: u8 = 0xFE;
    pub const LAST_FLAG: u8 = 0xFF;
}

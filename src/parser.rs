//! Reference decoder used by the round-trip tests. Decoding is not part
//! of the shipped surface; this module only exists to verify the encoder
//! against an independent reader of the same wire contract.

use std::collections::HashMap;

use nom::{
    bytes::complete::take,
    combinator::map,
    error::{Error, ErrorKind},
    multi::count,
    number::complete::{le_i32, le_i8, le_u16, le_u32, le_u8},
    IResult as _IResult, Parser,
};

use crate::{
    constants::{obd_flags, SPRITE_PIXEL_BYTES},
    types::{
        Animation, AnimationMode, DisplayOffset, FrameDuration, FrameGroup, FrameGroupType,
        Light, Market, ObjectData, Sprite, StackOrder, ThingCategory, ThingType,
    },
};

pub type IResult<'a, T> = _IResult<&'a [u8], T>;

fn category_from_name(name: &[u8]) -> ThingCategory {
    match name {
        b"item" => ThingCategory::Item,
        b"outfit" => ThingCategory::Outfit,
        b"effect" => ThingCategory::Effect,
        b"missile" => ThingCategory::Missile,
        _ => ThingCategory::Invalid,
    }
}

fn category_from_code(code: u8) -> ThingCategory {
    match code {
        1 => ThingCategory::Item,
        2 => ThingCategory::Outfit,
        3 => ThingCategory::Effect,
        4 => ThingCategory::Missile,
        _ => ThingCategory::Invalid,
    }
}

fn parse_market(i: &[u8]) -> IResult<Market> {
    let (i, (category, trade_as, show_as, name_length)) =
        (le_u16, le_u16, le_u16, le_u16).parse(i)?;
    let (i, name) = take(name_length as usize).parse(i)?;
    let (i, (restrict_vocation, restrict_level)) = (le_u16, le_u16).parse(i)?;

    Ok((
        i,
        Market {
            category,
            trade_as,
            show_as,
            name: String::from_utf8_lossy(name).into_owned(),
            restrict_vocation,
            restrict_level,
        },
    ))
}

/// Reads the flag section up to and including the sentinel. The two
/// dialects share tag values; `extended` gates the tags the legacy
/// dialect does not know.
fn parse_properties<'a>(
    mut i: &'a [u8],
    category: ThingCategory,
    extended: bool,
) -> IResult<'a, ThingType> {
    let mut thing = ThingType {
        category,
        ..Default::default()
    };

    loop {
        let (rest, tag) = le_u8.parse(i)?;
        i = rest;

        match tag {
            obd_flags::LAST_FLAG => break,
            obd_flags::GROUND => {
                let (rest, speed) = le_u16.parse(i)?;
                i = rest;
                thing.stack_order = StackOrder::Ground { speed };
            }
            obd_flags::GROUND_BORDER => thing.stack_order = StackOrder::Border,
            obd_flags::ON_BOTTOM => thing.stack_order = StackOrder::Bottom,
            obd_flags::ON_TOP => thing.stack_order = StackOrder::Top,
            obd_flags::CONTAINER => thing.is_container = true,
            obd_flags::STACKABLE => thing.stackable = true,
            obd_flags::FORCE_USE => thing.force_use = true,
            obd_flags::MULTI_USE => thing.multi_use = true,
            obd_flags::WRITABLE => {
                let (rest, max_text_length) = le_u16.parse(i)?;
                i = rest;
                thing.writable = Some(max_text_length);
            }
            obd_flags::WRITABLE_ONCE => {
                let (rest, max_text_length) = le_u16.parse(i)?;
                i = rest;
                thing.writable_once = Some(max_text_length);
            }
            obd_flags::FLUID_CONTAINER => thing.is_fluid_container = true,
            obd_flags::FLUID => thing.is_fluid = true,
            obd_flags::UNPASSABLE => thing.unpassable = true,
            obd_flags::UNMOVABLE => thing.unmovable = true,
            obd_flags::BLOCK_MISSILES => thing.block_missiles = true,
            obd_flags::BLOCK_PATHFINDER => thing.block_pathfinder = true,
            obd_flags::NO_MOVE_ANIMATION => thing.no_move_animation = true,
            obd_flags::PICKUPABLE => thing.pickupable = true,
            obd_flags::HANGABLE => thing.hangable = true,
            obd_flags::HOOK_SOUTH => thing.hook_south = true,
            obd_flags::HOOK_EAST => thing.hook_east = true,
            obd_flags::ROTATABLE => thing.rotatable = true,
            obd_flags::HAS_LIGHT => {
                let (rest, (level, color)) = (le_u16, le_u16).parse(i)?;
                i = rest;
                thing.light = Some(Light { level, color });
            }
            obd_flags::DONT_HIDE => thing.dont_hide = true,
            obd_flags::TRANSLUCENT => thing.translucent = true,
            obd_flags::HAS_OFFSET => {
                let (rest, (x, y)) = (le_u16, le_u16).parse(i)?;
                i = rest;
                thing.display_offset = Some(DisplayOffset { x, y });
            }
            obd_flags::HAS_ELEVATION => {
                let (rest, elevation) = le_u16.parse(i)?;
                i = rest;
                thing.elevation = Some(elevation);
            }
            obd_flags::LYING_OBJECT => thing.lying_object = true,
            obd_flags::ANIMATE_ALWAYS => thing.animate_always = true,
            obd_flags::MINIMAP => {
                let (rest, color) = le_u16.parse(i)?;
                i = rest;
                thing.minimap_color = Some(color);
            }
            obd_flags::LENS_HELP => {
                let (rest, value) = le_u16.parse(i)?;
                i = rest;
                thing.lens_help = Some(value);
            }
            obd_flags::FULL_GROUND => thing.full_ground = true,
            obd_flags::IGNORE_LOOK => thing.ignore_look = true,
            obd_flags::CLOTH => {
                let (rest, slot) = le_u16.parse(i)?;
                i = rest;
                thing.cloth_slot = Some(slot);
            }
            obd_flags::MARKET => {
                let (rest, market) = parse_market(i)?;
                i = rest;
                thing.market = Some(market);
            }
            obd_flags::DEFAULT_ACTION => {
                let (rest, action) = le_u16.parse(i)?;
                i = rest;
                thing.default_action = Some(action);
            }
            obd_flags::WRAPPABLE if extended => thing.wrappable = true,
            obd_flags::UNWRAPPABLE if extended => thing.unwrappable = true,
            obd_flags::TOP_EFFECT if extended => thing.is_top_effect = true,
            obd_flags::HAS_CHARGES if extended => thing.has_charges = true,
            obd_flags::FLOOR_CHANGE if extended => thing.floor_change = true,
            obd_flags::USABLE => thing.usable = true,
            _ => return Err(nom::Err::Failure(Error::new(i, ErrorKind::Switch))),
        }
    }

    Ok((i, thing))
}

fn parse_frame_group(i: &[u8], with_animation: bool) -> IResult<FrameGroup> {
    let (i, (width, height)) = (le_u8, le_u8).parse(i)?;
    let (i, exact_size) = if width > 1 || height > 1 {
        le_u8.parse(i)?
    } else {
        (i, 32)
    };
    let (i, (layers, pattern_x, pattern_y, pattern_z, frames)) =
        (le_u8, le_u8, le_u8, le_u8, le_u8).parse(i)?;

    let mut group = FrameGroup {
        width,
        height,
        exact_size,
        layers,
        pattern_x,
        pattern_y,
        pattern_z,
        frames,
        animation: None,
    };

    if with_animation && group.is_animation() {
        let (i, (mode, loop_count, start_frame)) = (le_u8, le_i32, le_i8).parse(i)?;
        let (i, frame_durations) = count(
            map((le_u32, le_u32), |(minimum, maximum)| FrameDuration {
                minimum,
                maximum,
            }),
            frames as usize,
        )
        .parse(i)?;

        group.animation = Some(Animation {
            mode: if mode == 1 {
                AnimationMode::Synchronous
            } else {
                AnimationMode::Asynchronous
            },
            loop_count,
            start_frame,
            frame_durations,
        });

        return Ok((i, group));
    }

    Ok((i, group))
}

fn parse_sprite_v1(i: &[u8]) -> IResult<Sprite> {
    let (i, (id, length)) = (le_u32, le_u32).parse(i)?;
    let (i, pixels) = take(length as usize).parse(i)?;

    Ok((
        i,
        Sprite {
            id,
            pixels: pixels.to_vec(),
        },
    ))
}

fn parse_sprite_v2(i: &[u8]) -> IResult<Sprite> {
    let (i, id) = le_u32.parse(i)?;
    let (i, pixels) = take(SPRITE_PIXEL_BYTES as usize).parse(i)?;

    Ok((
        i,
        Sprite {
            id,
            pixels: pixels.to_vec(),
        },
    ))
}

pub fn parse_v1(i: &[u8]) -> IResult<ObjectData> {
    let (i, _format) = le_u16.parse(i)?;
    let (i, name_length) = le_u16.parse(i)?;
    let (i, name) = take(name_length as usize).parse(i)?;

    let (i, mut thing) = parse_properties(i, category_from_name(name), false)?;
    let (i, group) = parse_frame_group(i, false)?;

    let sprite_count = group.total_sprites();
    let (i, sprites) = count(parse_sprite_v1, sprite_count).parse(i)?;

    thing.frame_groups.insert(FrameGroupType::Default, group);

    let mut data = ObjectData {
        thing_type: thing,
        sprites: HashMap::new(),
    };
    data.sprites.insert(FrameGroupType::Default, sprites);

    Ok((i, data))
}

pub fn parse_v2(i: &[u8]) -> IResult<ObjectData> {
    let (i, (_version, _format)) = (le_u16, le_u16).parse(i)?;
    let (i, category) = map(le_u8, category_from_code).parse(i)?;
    let (i, _patterns_position) = le_u32.parse(i)?;

    let (i, mut thing) = parse_properties(i, category, true)?;
    let (i, group) = parse_frame_group(i, true)?;

    let sprite_count = group.total_sprites();
    let (i, sprites) = count(parse_sprite_v2, sprite_count).parse(i)?;

    thing.frame_groups.insert(FrameGroupType::Default, group);

    let mut data = ObjectData {
        thing_type: thing,
        sprites: HashMap::new(),
    };
    data.sprites.insert(FrameGroupType::Default, sprites);

    Ok((i, data))
}

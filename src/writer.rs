use byte_writer::ByteWriter;

use crate::{
    constants::{legacy_flags, obd_flags, DAT_FORMAT_1010, DAT_FORMAT_1050},
    error::ObdError,
    types::{
        FrameGroup, FrameGroupType, Market, ObdVersion, ObjectData, Sprite, StackOrder,
        ThingCategory, ThingType,
    },
    utils::compress,
};

impl ObjectData {
    /// Encodes this object into a compressed artifact at the requested
    /// version.
    ///
    /// Returns the complete artifact or the first failure; a partial
    /// buffer is never handed out, and compression never runs on one.
    pub fn encode(&self, version: ObdVersion) -> Result<Vec<u8>, ObdError> {
        match version {
            ObdVersion::Version1 => self.encode_v1(),
            ObdVersion::Version2 => self.encode_v2(),
            ObdVersion::Version3 => Err(ObdError::UnsupportedVersion { version }),
        }
    }

    fn default_frame_group(&self) -> Result<&FrameGroup, ObdError> {
        self.thing_type
            .frame_groups
            .get(&FrameGroupType::Default)
            .ok_or(ObdError::MissingDefaultFrameGroup)
    }

    fn default_sprites(&self) -> Result<&[Sprite], ObdError> {
        self.sprites
            .get(&FrameGroupType::Default)
            .map(Vec::as_slice)
            .ok_or(ObdError::MissingDefaultSprites)
    }

    fn encode_v1(&self) -> Result<Vec<u8>, ObdError> {
        let mut writer = ByteWriter::new();

        writer.append_u16(DAT_FORMAT_1010);

        let category = self.category().name();
        writer.append_u16(category.len() as u16);
        writer.append_string(category);

        write_properties_legacy(&self.thing_type, &mut writer)?;

        let group = self.default_frame_group()?;
        write_frame_group(group, false, &mut writer)?;

        // length-prefixed sprite payloads
        for sprite in self.default_sprites()? {
            writer.append_u32(sprite.id);
            writer.append_u32(sprite.pixels.len() as u32);
            writer.append_u8_slice(&sprite.pixels);
        }

        compress(&writer.data)
    }

    fn encode_v2(&self) -> Result<Vec<u8>, ObdError> {
        let mut writer = ByteWriter::new();

        writer.append_u16(ObdVersion::Version2 as u16);
        writer.append_u16(DAT_FORMAT_1050);
        writer.append_u8(self.category() as u8);

        // patched with the post-property offset once the variable-length
        // property section is written, so a reader can seek straight to
        // the patterns section
        let patterns_position = writer.reserve_u32();

        write_properties(&self.thing_type, &mut writer)?;

        writer.replace_with_u32(patterns_position, writer.get_offset() as u32);

        let group = self.default_frame_group()?;
        write_frame_group(group, true, &mut writer)?;

        // sprite payloads carry no length prefix; the reader derives the
        // buffer size from the cell dimensions
        for sprite in self.default_sprites()? {
            writer.append_u32(sprite.id);
            writer.append_u8_slice(&sprite.pixels);
        }

        compress(&writer.data)
    }
}

fn write_frame_group(
    group: &FrameGroup,
    with_animation: bool,
    writer: &mut ByteWriter,
) -> Result<(), ObdError> {
    writer.append_u8(group.width);
    writer.append_u8(group.height);

    if group.width > 1 || group.height > 1 {
        writer.append_u8(group.exact_size);
    }

    writer.append_u8(group.layers);
    writer.append_u8(group.pattern_x);
    writer.append_u8(group.pattern_y);
    writer.append_u8(group.pattern_z);
    writer.append_u8(group.frames);

    // the legacy layout has no timing section
    if !with_animation || !group.is_animation() {
        return Ok(());
    }

    let Some(animation) = &group.animation else {
        return Err(ObdError::MissingAnimation {
            frames: group.frames,
        });
    };

    if animation.frame_durations.len() != group.frames as usize {
        return Err(ObdError::MismatchedFrameDurations {
            frames: group.frames as usize,
            durations: animation.frame_durations.len(),
        });
    }

    writer.append_u8(animation.mode as u8);
    writer.append_i32(animation.loop_count);
    writer.append_i8(animation.start_frame);

    for duration in &animation.frame_durations {
        writer.append_u32(duration.minimum);
        writer.append_u32(duration.maximum);
    }

    Ok(())
}

fn write_market(market: &Market, tag: u8, writer: &mut ByteWriter) -> Result<(), ObdError> {
    let name = market.name.as_bytes();

    if name.len() > u16::MAX as usize {
        return Err(ObdError::MarketNameTooLong { length: name.len() });
    }

    writer.append_u8(tag);
    writer.append_u16(market.category);
    writer.append_u16(market.trade_as);
    writer.append_u16(market.show_as);
    writer.append_u16(name.len() as u16);
    writer.append_u8_slice(name);
    writer.append_u16(market.restrict_vocation);
    writer.append_u16(market.restrict_level);

    Ok(())
}

/// Extended-dialect property section.
///
/// Flags are emitted in a fixed order matched positionally by the reader;
/// reordering any branch breaks the wire contract.
fn write_properties(thing: &ThingType, writer: &mut ByteWriter) -> Result<(), ObdError> {
    if thing.category == ThingCategory::Item {
        match thing.stack_order {
            StackOrder::None => {}
            StackOrder::Ground { speed } => {
                writer.append_u8(obd_flags::GROUND);
                writer.append_u16(speed);
            }
            StackOrder::Border => writer.append_u8(obd_flags::GROUND_BORDER),
            StackOrder::Bottom => writer.append_u8(obd_flags::ON_BOTTOM),
            StackOrder::Top => writer.append_u8(obd_flags::ON_TOP),
        }

        if thing.is_container {
            writer.append_u8(obd_flags::CONTAINER);
        }

        if thing.stackable {
            writer.append_u8(obd_flags::STACKABLE);
        }

        if thing.force_use {
            writer.append_u8(obd_flags::FORCE_USE);
        }

        if thing.multi_use {
            writer.append_u8(obd_flags::MULTI_USE);
        }

        if let Some(max_text_length) = thing.writable {
            writer.append_u8(obd_flags::WRITABLE);
            writer.append_u16(max_text_length);
        }

        if let Some(max_text_length) = thing.writable_once {
            writer.append_u8(obd_flags::WRITABLE_ONCE);
            writer.append_u16(max_text_length);
        }

        if thing.is_fluid_container {
            writer.append_u8(obd_flags::FLUID_CONTAINER);
        }

        if thing.is_fluid {
            writer.append_u8(obd_flags::FLUID);
        }

        if thing.unpassable {
            writer.append_u8(obd_flags::UNPASSABLE);
        }

        if thing.unmovable {
            writer.append_u8(obd_flags::UNMOVABLE);
        }

        if thing.block_missiles {
            writer.append_u8(obd_flags::BLOCK_MISSILES);
        }

        if thing.block_pathfinder {
            writer.append_u8(obd_flags::BLOCK_PATHFINDER);
        }

        if thing.no_move_animation {
            writer.append_u8(obd_flags::NO_MOVE_ANIMATION);
        }

        if thing.pickupable {
            writer.append_u8(obd_flags::PICKUPABLE);
        }

        if thing.hangable {
            writer.append_u8(obd_flags::HANGABLE);
        }

        if thing.hook_south {
            writer.append_u8(obd_flags::HOOK_SOUTH);
        }

        if thing.hook_east {
            writer.append_u8(obd_flags::HOOK_EAST);
        }

        if thing.rotatable {
            writer.append_u8(obd_flags::ROTATABLE);
        }

        if thing.dont_hide {
            writer.append_u8(obd_flags::DONT_HIDE);
        }

        if thing.translucent {
            writer.append_u8(obd_flags::TRANSLUCENT);
        }

        if let Some(elevation) = thing.elevation {
            writer.append_u8(obd_flags::HAS_ELEVATION);
            writer.append_u16(elevation);
        }

        if thing.lying_object {
            writer.append_u8(obd_flags::LYING_OBJECT);
        }

        if let Some(color) = thing.minimap_color {
            writer.append_u8(obd_flags::MINIMAP);
            writer.append_u16(color);
        }

        if let Some(value) = thing.lens_help {
            writer.append_u8(obd_flags::LENS_HELP);
            writer.append_u16(value);
        }

        if thing.full_ground {
            writer.append_u8(obd_flags::FULL_GROUND);
        }

        if thing.ignore_look {
            writer.append_u8(obd_flags::IGNORE_LOOK);
        }

        if let Some(slot) = thing.cloth_slot {
            writer.append_u8(obd_flags::CLOTH);
            writer.append_u16(slot);
        }

        if let Some(market) = &thing.market {
            write_market(market, obd_flags::MARKET, writer)?;
        }

        if let Some(action) = thing.default_action {
            writer.append_u8(obd_flags::DEFAULT_ACTION);
            writer.append_u16(action);
        }

        if thing.has_charges {
            writer.append_u8(obd_flags::HAS_CHARGES);
        }

        if thing.floor_change {
            writer.append_u8(obd_flags::FLOOR_CHANGE);
        }

        if thing.wrappable {
            writer.append_u8(obd_flags::WRAPPABLE);
        }

        if thing.unwrappable {
            writer.append_u8(obd_flags::UNWRAPPABLE);
        }

        if thing.is_top_effect {
            writer.append_u8(obd_flags::TOP_EFFECT);
        }

        if thing.usable {
            writer.append_u8(obd_flags::USABLE);
        }
    }

    if let Some(light) = &thing.light {
        writer.append_u8(obd_flags::HAS_LIGHT);
        writer.append_u16(light.level);
        writer.append_u16(light.color);
    }

    if let Some(offset) = &thing.display_offset {
        writer.append_u8(obd_flags::HAS_OFFSET);
        writer.append_u16(offset.x);
        writer.append_u16(offset.y);
    }

    if thing.animate_always {
        writer.append_u8(obd_flags::ANIMATE_ALWAYS);
    }

    writer.append_u8(obd_flags::LAST_FLAG);

    Ok(())
}

/// Legacy-dialect property section, same canonical order as the extended
/// one. Attributes the 1010 dialect cannot express (charges, floor
/// change, wrap state, top effect) are skipped, not errors.
fn write_properties_legacy(thing: &ThingType, writer: &mut ByteWriter) -> Result<(), ObdError> {
    if thing.category == ThingCategory::Item {
        match thing.stack_order {
            StackOrder::None => {}
            StackOrder::Ground { speed } => {
                writer.append_u8(legacy_flags::GROUND);
                writer.append_u16(speed);
            }
            StackOrder::Border => writer.append_u8(legacy_flags::GROUND_BORDER),
            StackOrder::Bottom => writer.append_u8(legacy_flags::ON_BOTTOM),
            StackOrder::Top => writer.append_u8(legacy_flags::ON_TOP),
        }

        if thing.is_container {
            writer.append_u8(legacy_flags::CONTAINER);
        }

        if thing.stackable {
            writer.append_u8(legacy_flags::STACKABLE);
        }

        if thing.force_use {
            writer.append_u8(legacy_flags::FORCE_USE);
        }

        if thing.multi_use {
            writer.append_u8(legacy_flags::MULTI_USE);
        }

        if let Some(max_text_length) = thing.writable {
            writer.append_u8(legacy_flags::WRITABLE);
            writer.append_u16(max_text_length);
        }

        if let Some(max_text_length) = thing.writable_once {
            writer.append_u8(legacy_flags::WRITABLE_ONCE);
            writer.append_u16(max_text_length);
        }

        if thing.is_fluid_container {
            writer.append_u8(legacy_flags::FLUID_CONTAINER);
        }

        if thing.is_fluid {
            writer.append_u8(legacy_flags::FLUID);
        }

        if thing.unpassable {
            writer.append_u8(legacy_flags::UNPASSABLE);
        }

        if thing.unmovable {
            writer.append_u8(legacy_flags::UNMOVABLE);
        }

        if thing.block_missiles {
            writer.append_u8(legacy_flags::BLOCK_MISSILES);
        }

        if thing.block_pathfinder {
            writer.append_u8(legacy_flags::BLOCK_PATHFINDER);
        }

        if thing.no_move_animation {
            writer.append_u8(legacy_flags::NO_MOVE_ANIMATION);
        }

        if thing.pickupable {
            writer.append_u8(legacy_flags::PICKUPABLE);
        }

        if thing.hangable {
            writer.append_u8(legacy_flags::HANGABLE);
        }

        if thing.hook_south {
            writer.append_u8(legacy_flags::HOOK_SOUTH);
        }

        if thing.hook_east {
            writer.append_u8(legacy_flags::HOOK_EAST);
        }

        if thing.rotatable {
            writer.append_u8(legacy_flags::ROTATABLE);
        }

        if thing.dont_hide {
            writer.append_u8(legacy_flags::DONT_HIDE);
        }

        if thing.translucent {
            writer.append_u8(legacy_flags::TRANSLUCENT);
        }

        if let Some(elevation) = thing.elevation {
            writer.append_u8(legacy_flags::HAS_ELEVATION);
            writer.append_u16(elevation);
        }

        if thing.lying_object {
            writer.append_u8(legacy_flags::LYING_OBJECT);
        }

        if let Some(color) = thing.minimap_color {
            writer.append_u8(legacy_flags::MINIMAP);
            writer.append_u16(color);
        }

        if let Some(value) = thing.lens_help {
            writer.append_u8(legacy_flags::LENS_HELP);
            writer.append_u16(value);
        }

        if thing.full_ground {
            writer.append_u8(legacy_flags::FULL_GROUND);
        }

        if thing.ignore_look {
            writer.append_u8(legacy_flags::IGNORE_LOOK);
        }

        if let Some(slot) = thing.cloth_slot {
            writer.append_u8(legacy_flags::CLOTH);
            writer.append_u16(slot);
        }

        if let Some(market) = &thing.market {
            write_market(market, legacy_flags::MARKET, writer)?;
        }

        if let Some(action) = thing.default_action {
            writer.append_u8(legacy_flags::DEFAULT_ACTION);
            writer.append_u16(action);
        }

        if thing.usable {
            writer.append_u8(legacy_flags::USABLE);
        }
    }

    if let Some(light) = &thing.light {
        writer.append_u8(legacy_flags::HAS_LIGHT);
        writer.append_u16(light.level);
        writer.append_u16(light.color);
    }

    if let Some(offset) = &thing.display_offset {
        writer.append_u8(legacy_flags::HAS_OFFSET);
        writer.append_u16(offset.x);
        writer.append_u16(offset.y);
    }

    if thing.animate_always {
        writer.append_u8(legacy_flags::ANIMATE_ALWAYS);
    }

    writer.append_u8(legacy_flags::LAST_FLAG);

    Ok(())
}

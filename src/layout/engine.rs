use log::{debug, info};

use super::{
    palette::{channel_color, Rgb},
    rect::Rect,
    tiling::tile,
};
use crate::{MAX_CHANNELS, MAX_NOTES};

/// One pitch on one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoteEntry {
    seen: bool,
    active: bool,
    region: Rect,
}

impl NoteEntry {
    const EMPTY: NoteEntry = NoteEntry {
        seen: false,
        active: false,
        region: Rect::EMPTY,
    };

    /// Has this note ever sounded since the last reset?
    pub fn is_seen(&self) -> bool {
        self.seen
    }

    /// Is the note currently held?
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Sub-rectangle of the parent channel's region. Empty until the note is
    /// seen and its channel has a region.
    pub fn region(&self) -> Rect {
        self.region
    }
}

/// One of the sixteen MIDI channels and its note table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelEntry {
    seen: bool,
    color: Rgb,
    region: Rect,
    seen_note_count: usize,
    notes: [NoteEntry; MAX_NOTES],
}

impl ChannelEntry {
    fn new() -> Self {
        Self {
            seen: false,
            color: Rgb::BLACK,
            region: Rect::EMPTY,
            seen_note_count: 0,
            notes: [NoteEntry::EMPTY; MAX_NOTES],
        }
    }

    pub fn is_seen(&self) -> bool {
        self.seen
    }

    /// Palette color assigned when the channel was first seen.
    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn region(&self) -> Rect {
        self.region
    }

    pub fn seen_note_count(&self) -> usize {
        self.seen_note_count
    }

    pub fn note(&self, note: usize) -> Option<&NoteEntry> {
        self.notes.get(note)
    }

    /// Seen notes in ascending pitch order.
    pub fn seen_notes(&self) -> impl Iterator<Item = (usize, &NoteEntry)> {
        self.notes.iter().enumerate().filter(|(_, n)| n.seen)
    }

    /// Re-tile the channel's region among its seen notes.
    fn layout_notes(&mut self) {
        let mut tiles = [Rect::EMPTY; MAX_NOTES];
        let count = self.seen_note_count;
        tile(self.region, &mut tiles[..count]);

        let seen = self.notes.iter_mut().filter(|n| n.seen);
        for (note, region) in seen.zip(tiles) {
            note.region = region;
        }
    }
}

/// Owns every channel and note slot and keeps their regions partitioned.
///
/// Regions only change when something new is *seen*; holding or releasing
/// notes just flips flags. All mutation goes through `&mut self`, so a
/// reader holding `&LayoutEngine` always sees a finished layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutEngine {
    bounds: Rect,
    channels: [ChannelEntry; MAX_CHANNELS],
    seen_channel_count: usize,
}

impl LayoutEngine {
    /// Engine for a `width` x `height` matrix. The size is fixed for the
    /// engine's lifetime.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            bounds: Rect::sized(width, height),
            channels: std::array::from_fn(|_| ChannelEntry::new()),
            seen_channel_count: 0,
        }
    }

    /// Mark a channel as seen and re-partition the matrix.
    ///
    /// Returns `true` if the channel was new. Out-of-range indices and
    /// channels already seen are ignored.
    pub fn register_channel(&mut self, channel: usize) -> bool {
        let Some(color) = channel_color(channel) else {
            return false;
        };

        let entry = &mut self.channels[channel];
        if entry.seen {
            return false;
        }

        entry.seen = true;
        entry.color = color;
        self.seen_channel_count += 1;

        self.recompute();
        true
    }

    /// Mark a note as seen and re-partition its channel.
    ///
    /// Returns `true` if the note was new. Only the owning channel's note
    /// layout can change, so only that channel is re-tiled. If the channel
    /// hasn't been seen yet the note waits for the channel's first layout.
    pub fn register_note(&mut self, channel: usize, note: usize) -> bool {
        if channel >= MAX_CHANNELS || note >= MAX_NOTES {
            return false;
        }

        let entry = &mut self.channels[channel];
        if entry.notes[note].seen {
            return false;
        }

        entry.notes[note].seen = true;
        entry.notes[note].active = false;
        entry.seen_note_count += 1;

        if entry.seen {
            debug!(
                "channel {channel}: tiling {} seen notes",
                entry.seen_note_count
            );
            entry.layout_notes();
        }
        true
    }

    /// Set whether a note is currently held. Never touches geometry.
    pub fn set_active(&mut self, channel: usize, note: usize, active: bool) {
        if let Some(entry) = self
            .channels
            .get_mut(channel)
            .and_then(|c| c.notes.get_mut(note))
        {
            entry.active = active;
        }
    }

    /// Forget every channel and note.
    pub fn reset(&mut self) {
        for channel in &mut self.channels {
            *channel = ChannelEntry::new();
        }
        self.seen_channel_count = 0;
        info!("layout reset");
    }

    /// Rebuild every region from scratch: channels over the whole matrix,
    /// then each channel's seen notes over the channel.
    pub fn recompute(&mut self) {
        if self.seen_channel_count == 0 {
            return;
        }

        let mut tiles = [Rect::EMPTY; MAX_CHANNELS];
        let count = self.seen_channel_count;
        debug!("recomputing layout: {count} channels");
        tile(self.bounds, &mut tiles[..count]);

        let seen = self.channels.iter_mut().filter(|c| c.seen);
        for (channel, region) in seen.zip(tiles) {
            channel.region = region;
            if channel.seen_note_count > 0 {
                channel.layout_notes();
            }
        }
    }

    /// The whole matrix.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn seen_channel_count(&self) -> usize {
        self.seen_channel_count
    }

    pub fn channel(&self, channel: usize) -> Option<&ChannelEntry> {
        self.channels.get(channel)
    }

    pub fn note(&self, channel: usize, note: usize) -> Option<&NoteEntry> {
        self.channel(channel).and_then(|c| c.note(note))
    }

    /// Seen channels in ascending index order.
    pub fn seen_channels(&self) -> impl Iterator<Item = (usize, &ChannelEntry)> {
        self.channels.iter().enumerate().filter(|(_, c)| c.seen)
    }

    /// Number of notes currently held across all channels.
    pub fn active_note_count(&self) -> usize {
        self.seen_channels()
            .flat_map(|(_, c)| c.seen_notes())
            .filter(|(_, n)| n.active)
            .count()
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(crate::DEFAULT_WIDTH, crate::DEFAULT_HEIGHT)
    }
}

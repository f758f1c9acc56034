use crate::{io::midi::MidiEvent, layout::LayoutEngine, MAX_NOTES};

/// Apply one decoded event to the layout.
///
/// Note-ons register the channel and note (possibly re-partitioning) and then
/// mark the note held. Note-offs only clear the flag; a release never makes a
/// channel or note appear.
pub fn route(event: MidiEvent, engine: &mut LayoutEngine) {
    match event {
        MidiEvent::NoteOn { channel, key, .. } => {
            let (channel, key) = (channel as usize, key as usize);
            engine.register_channel(channel);
            engine.register_note(channel, key);
            engine.set_active(channel, key, true);
        }
        MidiEvent::NoteOff { channel, key } => {
            engine.set_active(channel as usize, key as usize, false);
        }
        MidiEvent::AllNotesOff { channel } => {
            for key in 0..MAX_NOTES {
                engine.set_active(channel as usize, key, false);
            }
        }
    }
}

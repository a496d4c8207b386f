use core::slice;

use crate::event::TrackEvent;

#[doc = r#"
A value paired with the absolute tick at which it occurs.

Delta-times only say how far an event lies from its predecessor. Walking a
track with [`EventTrack::ticked`](super::EventTrack::ticked) sums them up.
"#]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Ticked<T> {
    accumulated_ticks: u64,
    event: T,
}

impl<T> Ticked<T> {
    /// Pair `event` with its absolute tick
    pub const fn new(accumulated_ticks: u64, event: T) -> Self {
        Self {
            accumulated_ticks,
            event,
        }
    }

    /// Ticks from the start of the track
    pub const fn accumulated_ticks(&self) -> u64 {
        self.accumulated_ticks
    }

    /// The event
    pub const fn event(&self) -> &T {
        &self.event
    }

    /// Discard the tick
    pub fn into_event(self) -> T {
        self.event
    }
}

/// Iterator over the events of a track with their absolute ticks
#[derive(Clone, Debug)]
pub struct TickedEvents<'a> {
    ticks: u64,
    events: slice::Iter<'a, TrackEvent>,
}

impl<'a> TickedEvents<'a> {
    pub(super) fn new(events: &'a [TrackEvent]) -> Self {
        Self {
            ticks: 0,
            events: events.iter(),
        }
    }
}

impl<'a> Iterator for TickedEvents<'a> {
    type Item = Ticked<&'a TrackEvent>;
    fn next(&mut self) -> Option<Self::Item> {
        let event = self.events.next()?;
        self.ticks += event.delta_ticks() as u64;
        Some(Ticked::new(self.ticks, event))
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.events.size_hint()
    }
}

impl ExactSizeIterator for TickedEvents<'_> {}

#[test]
fn ticks_accumulate() {
    use crate::message::MetaMessage;
    use alloc::vec::Vec;
    use pretty_assertions::assert_eq;

    let events = [
        TrackEvent::new(0, MetaMessage::Marker("a".into())).unwrap(),
        TrackEvent::new(480, MetaMessage::Marker("b".into())).unwrap(),
        TrackEvent::new(0, MetaMessage::Marker("c".into())).unwrap(),
        TrackEvent::new(240, MetaMessage::EndOfTrack).unwrap(),
    ];
    let iter = TickedEvents::new(&events);
    assert_eq!(iter.len(), 4);

    let ticks: Vec<u64> = iter.map(|t| t.accumulated_ticks()).collect();
    assert_eq!(ticks, [0, 480, 480, 720]);
}

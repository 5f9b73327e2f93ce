use crate::assets::SoundCue;
use crate::input::InputEvent;
use crate::state::{GameState, Outcome};
use log::info;

/// Paces the loop. Implementations block until the host is ready for another frame.
pub trait FrameScheduler {
    /// Returns `false` once the host is shutting down and no more frames will come.
    fn next_frame(&mut self) -> bool;
}

pub trait Frontend {
    /// Key events received since the previous frame, oldest first.
    fn poll_input(&mut self) -> Vec<InputEvent>;

    /// Fire-and-forget; a cue may overlap an earlier instance of itself.
    fn play(&mut self, cue: SoundCue);

    fn render(&mut self, state: &GameState);
}

/// Drives `state` frame by frame until the game ends or the host goes away.
///
/// Returns the outcome, or `None` if the host stopped scheduling frames first.
pub fn run<H>(state: &mut GameState, host: &mut H) -> Option<Outcome>
where
    H: FrameScheduler + Frontend,
{
    while state.is_running() {
        if !host.next_frame() {
            info!("host closed before the game ended");
            return None;
        }

        for event in host.poll_input() {
            state.handle_input(event);
        }

        for event in state.update() {
            if let Some(cue) = event.cue() {
                host.play(cue);
            }
        }

        host.render(state);
    }

    state.outcome()
}

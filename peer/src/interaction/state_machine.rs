use overclean_shared::NetworkObjectRef;

use crate::scene::InteractionMode;

/// Where the local player is in the hover/interact lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionState {
    Idle,
    Hovering(NetworkObjectRef),
    Interacting(NetworkObjectRef),
}

/// Side effects the owner of the state machine must carry out, in order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionCommand {
    Select(NetworkObjectRef),
    Deselect(NetworkObjectRef),
    Begin(NetworkObjectRef),
    End(NetworkObjectRef),
}

/// `Idle → Hovering → Interacting → Idle`, one object at a time.
///
/// The machine only decides transitions; legality and interaction modes are
/// looked up through the closures handed to [`update`](Self::update), and the
/// returned commands are executed by the peer.
pub struct InteractionStateMachine {
    state: InteractionState,
}

impl InteractionStateMachine {
    pub fn new() -> Self {
        Self {
            state: InteractionState::Idle,
        }
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn hovered(&self) -> Option<NetworkObjectRef> {
        match self.state {
            InteractionState::Idle => None,
            InteractionState::Hovering(target) | InteractionState::Interacting(target) => {
                Some(target)
            }
        }
    }

    pub fn interacting(&self) -> Option<NetworkObjectRef> {
        match self.state {
            InteractionState::Interacting(target) => Some(target),
            _ => None,
        }
    }

    /// Advance one frame.
    ///
    /// `candidate` is the probe's pick for this frame. Legality is checked
    /// when hovering and checked again right before interacting, since
    /// another player may have locked the object in between.
    pub fn update<L, M>(
        &mut self,
        candidate: Option<NetworkObjectRef>,
        interact_held: bool,
        interact_pressed: bool,
        is_legal: L,
        mode_of: M,
    ) -> Vec<InteractionCommand>
    where
        L: Fn(&NetworkObjectRef) -> bool,
        M: Fn(&NetworkObjectRef) -> Option<InteractionMode>,
    {
        let mut commands = Vec::new();

        let legal_candidate = candidate.filter(|target| is_legal(target));
        if legal_candidate != self.hovered() {
            // tear the old interaction down before moving on
            if let InteractionState::Interacting(target) = self.state {
                commands.push(InteractionCommand::End(target));
            }
            if let Some(old) = self.hovered() {
                commands.push(InteractionCommand::Deselect(old));
            }
            self.state = match legal_candidate {
                Some(target) => {
                    commands.push(InteractionCommand::Select(target));
                    InteractionState::Hovering(target)
                }
                None => InteractionState::Idle,
            };
        }

        match self.state {
            InteractionState::Idle => {}
            InteractionState::Hovering(target) => {
                let triggered = match mode_of(&target) {
                    Some(InteractionMode::Hold) => interact_held,
                    Some(InteractionMode::Press) => interact_pressed,
                    None => false,
                };
                if triggered && is_legal(&target) {
                    commands.push(InteractionCommand::Begin(target));
                    self.state = InteractionState::Interacting(target);
                }
            }
            InteractionState::Interacting(target) => {
                if !interact_held {
                    commands.push(InteractionCommand::End(target));
                    self.state = InteractionState::Idle;
                }
            }
        }

        commands
    }

    /// End whatever the machine is doing with `object`, which became unavailable
    pub fn force_stop(&mut self, object: &NetworkObjectRef) -> Vec<InteractionCommand> {
        match self.state {
            InteractionState::Interacting(target) if target == *object => {
                self.state = InteractionState::Idle;
                vec![InteractionCommand::End(target), InteractionCommand::Deselect(target)]
            }
            InteractionState::Hovering(target) if target == *object => {
                self.state = InteractionState::Idle;
                vec![InteractionCommand::Deselect(target)]
            }
            _ => Vec::new(),
        }
    }
}

impl Default for InteractionStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

// Player model: state machine driving physics and animation

use std::collections::HashMap;

use glam::Vec2;
use log::debug;
use rand::Rng;

use crate::engine::assets::FrameSource;
use crate::engine::physics::{PhysicsComponent, World};
use crate::game::config::PlayerConfig;

use super::animation::{Animation, AnimationId, AnimationLibrary};
use super::state::{standard_states, Control, State, StateId, TransitionTable};
use super::PlayerError;

/// A state together with the animation instance it plays
#[derive(Debug, Clone, Copy)]
struct Binding {
    state: State,
    animation: AnimationId,
}

/// The playable character
///
/// `F` is the frame type of its animations: decoded images, GPU texture
/// handles, or anything a [`FrameSource`] produces.
#[derive(Debug)]
pub struct Player<F> {
    /// Box moved by gravity and state hooks
    physics: PhysicsComponent,

    /// Every state and the animation it is bound to
    bindings: HashMap<StateId, Binding>,

    /// Static (state, control, edge) -> state mapping
    transitions: TransitionTable,

    /// Animation instances, shared between states that name the same one
    animations: AnimationLibrary<F>,

    /// Currently active state
    state: StateId,

    /// State requested by the last matching control, applied on `update`
    pending: StateId,

    /// Animation of the active state
    animation: AnimationId,
}

impl<F> Player<F> {
    /// Create a player standing idle, facing left or right at random
    pub fn new<S>(config: &PlayerConfig, world: World, source: &mut S) -> Result<Self, PlayerError>
    where
        S: FrameSource<F> + ?Sized,
    {
        let initial = if rand::thread_rng().gen_bool(0.5) {
            StateId::IdleLeft
        } else {
            StateId::IdleRight
        };

        Self::with_initial_state(config, world, source, initial)
    }

    /// Create a player in a chosen initial state
    pub fn with_initial_state<S>(
        config: &PlayerConfig,
        world: World,
        source: &mut S,
        initial: StateId,
    ) -> Result<Self, PlayerError>
    where
        S: FrameSource<F> + ?Sized,
    {
        let mut animations = AnimationLibrary::new();
        let mut bindings = HashMap::new();

        for (id, state) in standard_states(config.walk_speed, config.jump_force) {
            let animation = animations.load(source, state.animation, state.looping)?;
            bindings.insert(id, Binding { state, animation });
        }

        let physics = PhysicsComponent::new(world, config.size)
            .with_position(config.spawn)
            .with_velocity(config.spawn_velocity)
            .with_acceleration(world.gravity() + config.spawn_acceleration);
        let animation = bindings[&initial].animation;

        let mut player = Self {
            physics,
            bindings,
            transitions: TransitionTable::standard(),
            animations,
            state: initial,
            pending: initial,
            animation,
        };
        player.enter(initial);

        debug!(
            "Player created in state {} with {} animations and {} transitions",
            initial,
            player.animations.len(),
            player.transitions.len()
        );

        Ok(player)
    }

    /// Feed a control signal to the state machine
    ///
    /// A matching transition is recorded and applied on the next
    /// [`update`](Self::update). Signals with no transition from the current
    /// state are ignored.
    pub fn control(&mut self, control: Control, edge: bool) {
        if let Some(next) = self.transitions.next(self.pending, control, edge) {
            self.pending = next;
        }
    }

    /// Signal a press (`control(signal, true)`)
    pub fn press(&mut self, control: Control) {
        self.control(control, true);
    }

    /// Signal a release (`control(signal, false)`)
    pub fn release(&mut self, control: Control) {
        self.control(control, false);
    }

    /// Advance the player by one tick
    ///
    /// Physics first, then the active state's hook, then a pending state
    /// switch, and finally the (possibly new) animation moves one frame.
    pub fn update(&mut self) {
        self.physics.update();

        let binding = self.bindings[&self.state];
        let fired = binding
            .state
            .update(&mut self.physics, &self.animations[binding.animation]);
        for control in fired {
            self.press(control);
        }

        if self.pending != self.state {
            self.switch_to(self.pending);
        }

        self.animations[self.animation].advance();
    }

    /// Force a state immediately, running its exit and entry hooks
    pub fn activate(&mut self, id: StateId) {
        self.pending = id;
        self.switch_to(id);
    }

    /// Force a state by name
    ///
    /// Unlike an unmatched control, an unknown name is a configuration error.
    pub fn activate_by_name(&mut self, name: &str) -> Result<(), PlayerError> {
        let id: StateId = name.parse()?;
        self.activate(id);
        Ok(())
    }

    fn switch_to(&mut self, next: StateId) {
        let previous = self.state;
        self.bindings[&previous].state.on_stop();
        self.state = next;
        self.enter(next);
        debug!("Player state {} -> {}", previous, next);
    }

    fn enter(&mut self, id: StateId) {
        let binding = self.bindings[&id];
        self.animation = binding.animation;
        binding
            .state
            .on_start(&mut self.physics, &mut self.animations[binding.animation]);
    }

    /// Get the active state
    pub fn state(&self) -> StateId {
        self.state
    }

    /// Get the state that the next update will switch to
    #[cfg(test)]
    pub fn pending_state(&self) -> StateId {
        self.pending
    }

    /// Get the animation bound to the active state
    pub fn animation(&self) -> &Animation<F> {
        &self.animations[self.animation]
    }

    /// Frame to draw this tick
    pub fn current_frame(&self) -> &F {
        self.animation().current()
    }

    /// Where to draw the frame (top-left corner of the physics box)
    pub fn position(&self) -> Vec2 {
        self.physics.position()
    }

    pub fn physics(&self) -> &PhysicsComponent {
        &self.physics
    }

    pub fn animations(&self) -> &AnimationLibrary<F> {
        &self.animations
    }
}

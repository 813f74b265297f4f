// Player states, control signals and the transition table

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::engine::physics::PhysicsComponent;
use glam::Vec2;

use super::animation::Animation;
use super::PlayerError;

/// Control signals fed to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Left,
    Right,
    Jump,
    /// Fired by jump states when they touch the floor
    Ground,
    Attack,
    /// Fired by a state when its one-shot animation finished
    End,
}

/// A control signal paired with its edge (`true` = pressed, `false` = released)
pub type TransitionKey = (Control, bool);

/// Identifier of one of the ten player states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateId {
    IdleLeft,
    IdleRight,
    WalkLeft,
    WalkRight,
    IdleJumpLeft,
    IdleJumpRight,
    JumpLeft,
    JumpRight,
    AttackLeft,
    AttackRight,
}

impl StateId {
    pub const ALL: [StateId; 10] = [
        Self::IdleLeft,
        Self::IdleRight,
        Self::WalkLeft,
        Self::WalkRight,
        Self::IdleJumpLeft,
        Self::IdleJumpRight,
        Self::JumpLeft,
        Self::JumpRight,
        Self::AttackLeft,
        Self::AttackRight,
    ];

    /// Snake-case name of the state
    pub fn name(&self) -> &'static str {
        match self {
            Self::IdleLeft => "idle_left",
            Self::IdleRight => "idle_right",
            Self::WalkLeft => "walk_left",
            Self::WalkRight => "walk_right",
            Self::IdleJumpLeft => "idle_jump_left",
            Self::IdleJumpRight => "idle_jump_right",
            Self::JumpLeft => "jump_left",
            Self::JumpRight => "jump_right",
            Self::AttackLeft => "attack_left",
            Self::AttackRight => "attack_right",
        }
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StateId {
    type Err = PlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.name() == s)
            .ok_or_else(|| PlayerError::UnknownState(s.to_string()))
    }
}

/// Per-state behaviour, parameterised instead of subclassed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StateBehavior {
    /// Plays its animation and fires `End` when a one-shot animation finishes
    Animated,
    /// Animated, plus a horizontal displacement every tick
    Move { speed: f32 },
    /// Animated, plus an upward impulse on entry and `Ground` on landing
    Jump { force: f32 },
    /// Jump with a horizontal displacement every tick
    JumpMove { speed: f32, force: f32 },
}

impl StateBehavior {
    /// Horizontal displacement per tick, if any
    pub fn speed(&self) -> Option<f32> {
        match *self {
            Self::Move { speed } | Self::JumpMove { speed, .. } => Some(speed),
            Self::Animated | Self::Jump { .. } => None,
        }
    }

    /// Upward impulse applied on entry, if any
    pub fn jump_force(&self) -> Option<f32> {
        match *self {
            Self::Jump { force } | Self::JumpMove { force, .. } => Some(force),
            Self::Animated | Self::Move { .. } => None,
        }
    }
}

/// A player state: the animation it shows and how it drives physics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    /// Name of the bound animation
    pub animation: &'static str,
    /// Loop flag requested for the animation
    pub looping: bool,
    pub behavior: StateBehavior,
}

impl State {
    pub const fn new(animation: &'static str, looping: bool, behavior: StateBehavior) -> Self {
        Self {
            animation,
            looping,
            behavior,
        }
    }

    /// Entry hook: restart the animation, jump if standing on the floor
    pub fn on_start<F>(&self, physics: &mut PhysicsComponent, animation: &mut Animation<F>) {
        animation.reset();

        if let Some(force) = self.behavior.jump_force() {
            if physics.is_on_ground() {
                physics.add_velocity(Vec2::new(0.0, -force));
            }
        }
    }

    /// Exit hook
    pub fn on_stop(&self) {}

    /// Per-tick hook, returning the controls it fires in order
    pub fn update<F>(&self, physics: &mut PhysicsComponent, animation: &Animation<F>) -> Vec<Control> {
        let mut fired = Vec::new();

        if animation.is_finished() {
            fired.push(Control::End);
        }

        if let Some(speed) = self.behavior.speed() {
            physics.translate_x(speed);
        }

        if self.behavior.jump_force().is_some() && physics.is_on_ground() {
            fired.push(Control::Ground);
        }

        fired
    }
}

/// Build the ten player states, in [`StateId::ALL`] order
pub fn standard_states(walk_speed: f32, jump_force: f32) -> [(StateId, State); 10] {
    use StateBehavior::*;

    let walk_left = Move { speed: -walk_speed };
    let walk_right = Move { speed: walk_speed };
    let jump = Jump { force: jump_force };
    let jump_left = JumpMove {
        speed: -walk_speed,
        force: jump_force,
    };
    let jump_right = JumpMove {
        speed: walk_speed,
        force: jump_force,
    };

    [
        (StateId::IdleLeft, State::new("idle_left", true, Animated)),
        (StateId::IdleRight, State::new("idle_right", true, Animated)),
        (StateId::WalkLeft, State::new("walk_left", true, walk_left)),
        (StateId::WalkRight, State::new("walk_right", true, walk_right)),
        (StateId::IdleJumpLeft, State::new("jump_left", false, jump)),
        (StateId::IdleJumpRight, State::new("jump_right", false, jump)),
        (StateId::JumpLeft, State::new("jump_left", false, jump_left)),
        (StateId::JumpRight, State::new("jump_right", false, jump_right)),
        (StateId::AttackLeft, State::new("vomit_left", false, Animated)),
        (StateId::AttackRight, State::new("vomit_right", false, Animated)),
    ]
}

/// Mapping from (state, control, edge) to the next state
///
/// Lookups that are not in the table return `None`: an unmatched control is
/// routine, not an error.
#[derive(Debug, Clone, Default)]
pub struct TransitionTable {
    transitions: HashMap<(StateId, TransitionKey), StateId>,
}

impl TransitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transition (builder style)
    pub fn with(mut self, from: StateId, control: Control, edge: bool, to: StateId) -> Self {
        self.insert(from, control, edge, to);
        self
    }

    pub fn insert(&mut self, from: StateId, control: Control, edge: bool, to: StateId) {
        self.transitions.insert((from, (control, edge)), to);
    }

    /// Look up the target of a transition
    pub fn next(&self, from: StateId, control: Control, edge: bool) -> Option<StateId> {
        self.transitions.get(&(from, (control, edge))).copied()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// The player's transition table
    pub fn standard() -> Self {
        use Control::*;
        use StateId::*;

        Self::new()
            .with(IdleLeft, Left, true, WalkLeft)
            .with(IdleLeft, Right, true, WalkRight)
            .with(IdleLeft, Jump, true, IdleJumpLeft)
            .with(IdleLeft, Attack, true, AttackLeft)
            .with(IdleRight, Left, true, WalkLeft)
            .with(IdleRight, Right, true, WalkRight)
            .with(IdleRight, Jump, true, IdleJumpRight)
            .with(IdleRight, Attack, true, AttackRight)
            .with(WalkLeft, Left, false, IdleLeft)
            .with(WalkLeft, Right, true, WalkRight)
            .with(WalkLeft, Jump, true, JumpLeft)
            .with(WalkLeft, Attack, true, AttackLeft)
            .with(WalkRight, Left, true, WalkLeft)
            .with(WalkRight, Right, false, IdleRight)
            .with(WalkRight, Jump, true, JumpRight)
            .with(WalkRight, Attack, true, AttackRight)
            .with(IdleJumpLeft, Ground, true, IdleLeft)
            .with(IdleJumpLeft, Left, true, JumpLeft)
            .with(IdleJumpLeft, Right, true, JumpRight)
            .with(IdleJumpRight, Ground, true, IdleRight)
            .with(IdleJumpRight, Right, true, JumpRight)
            .with(IdleJumpRight, Left, true, JumpLeft)
            .with(JumpLeft, Ground, true, WalkLeft)
            .with(JumpLeft, Left, false, IdleJumpLeft)
            .with(JumpRight, Ground, true, WalkRight)
            .with(JumpRight, Right, false, IdleJumpRight)
            .with(AttackLeft, End, true, IdleLeft)
            .with(AttackRight, End, true, IdleRight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Aabb;
    use crate::engine::physics::World;

    fn grounded_physics() -> PhysicsComponent {
        let bounds = Aabb::new(Vec2::new(0.0, 480.0), Vec2::new(600.0, -13.0));
        let world = World::new(bounds, Vec2::new(0.0, 2.0));
        let mut physics = PhysicsComponent::new(world, Vec2::new(186.0, 148.0))
            .with_position(Vec2::new(100.0, 319.0));
        physics.update();
        assert!(physics.is_on_ground());
        physics
    }

    #[test]
    fn test_state_names_roundtrip() {
        for id in StateId::ALL {
            assert_eq!(id.name().parse::<StateId>().unwrap(), id);
            assert_eq!(id.to_string(), id.name());
        }
    }

    #[test]
    fn test_unknown_state_name() {
        let err = "crouch_left".parse::<StateId>().unwrap_err();
        assert!(matches!(err, PlayerError::UnknownState(ref name) if name == "crouch_left"));
    }

    #[test]
    fn test_table_size() {
        assert_eq!(TransitionTable::standard().len(), 28);
    }

    #[test]
    fn test_walk_left_transitions() {
        let table = TransitionTable::standard();
        assert_eq!(
            table.next(StateId::WalkLeft, Control::Right, true),
            Some(StateId::WalkRight)
        );
        assert_eq!(
            table.next(StateId::WalkLeft, Control::Left, false),
            Some(StateId::IdleLeft)
        );
        assert_eq!(table.next(StateId::WalkLeft, Control::Right, false), None);
    }

    #[test]
    fn test_attack_only_leaves_on_end() {
        let table = TransitionTable::standard();
        for control in [
            Control::Left,
            Control::Right,
            Control::Jump,
            Control::Ground,
            Control::Attack,
        ] {
            for edge in [true, false] {
                assert_eq!(table.next(StateId::AttackLeft, control, edge), None);
            }
        }
        assert_eq!(
            table.next(StateId::AttackLeft, Control::End, true),
            Some(StateId::IdleLeft)
        );
        assert_eq!(
            table.next(StateId::AttackRight, Control::End, true),
            Some(StateId::IdleRight)
        );
    }

    #[test]
    fn test_every_state_has_a_binding() {
        let states: HashMap<StateId, State> = standard_states(4.0, 32.0).into_iter().collect();
        for id in StateId::ALL {
            assert!(states.contains_key(&id), "missing state {id}");
        }
        assert_eq!(states[&StateId::IdleJumpLeft].animation, "jump_left");
        assert_eq!(states[&StateId::AttackRight].animation, "vomit_right");
        assert_eq!(
            states[&StateId::WalkLeft].behavior,
            StateBehavior::Move { speed: -4.0 }
        );
    }

    #[test]
    fn test_jump_entry_pushes_up_when_grounded() {
        let mut physics = grounded_physics();
        let mut animation = Animation::new("jump_left", vec![0, 1], false).unwrap();
        animation.advance();

        let state = State::new("jump_left", false, StateBehavior::Jump { force: 32.0 });
        state.on_start(&mut physics, &mut animation);

        assert_eq!(physics.velocity().y, -32.0);
        assert_eq!(*animation.current(), 0);
    }

    #[test]
    fn test_jump_entry_in_air_has_no_impulse() {
        let bounds = Aabb::new(Vec2::new(0.0, 480.0), Vec2::new(600.0, -13.0));
        let world = World::new(bounds, Vec2::new(0.0, 2.0));
        let mut physics = PhysicsComponent::new(world, Vec2::new(186.0, 148.0));
        let mut animation = Animation::new("jump_left", vec![0], false).unwrap();

        let state = State::new("jump_left", false, StateBehavior::Jump { force: 32.0 });
        state.on_start(&mut physics, &mut animation);

        assert_eq!(physics.velocity().y, 0.0);
    }

    #[test]
    fn test_update_fires_end_and_ground() {
        let mut physics = grounded_physics();
        let animation = Animation::new("jump_right", vec![0], false).unwrap();

        let state = State::new(
            "jump_right",
            false,
            StateBehavior::JumpMove {
                speed: 4.0,
                force: 32.0,
            },
        );
        let fired = state.update(&mut physics, &animation);

        assert_eq!(fired, vec![Control::End, Control::Ground]);
        assert_eq!(physics.position().x, 104.0);
    }

    #[test]
    fn test_move_update_displaces() {
        let mut physics = grounded_physics();
        let animation = Animation::new("walk_left", vec![0, 1], true).unwrap();

        let state = State::new("walk_left", true, StateBehavior::Move { speed: -4.0 });
        let fired = state.update(&mut physics, &animation);

        assert!(fired.is_empty());
        assert_eq!(physics.position().x, 96.0);
    }
}

//! Team partition: arena-allocated combatants and two mutable side lists.
//!
//! Combatants live in one arena and are referenced by [`CombatantId`]
//! everywhere else, so moving a unit between sides (a successful hijack) is a
//! list edit, never a copy. The original opponent roster is kept for reward
//! computation at battle end.

use crate::combatant::Combatant;

/// Index of a combatant in the battle arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantId(pub u32);

/// Which side of the battle a combatant is on, relative to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Heroes,
    Opponents,
}

/// The mutable partition of all battle participants.
#[derive(Clone, Debug)]
pub struct Roster {
    arena: Vec<Combatant>,
    player: CombatantId,
    allies: Vec<CombatantId>,
    opponents: Vec<CombatantId>,
    original_opponents: Vec<CombatantId>,
}

impl Roster {
    /// Assembles the arena. The player always receives id 0.
    pub fn new(player: Combatant, allies: Vec<Combatant>, opponents: Vec<Combatant>) -> Self {
        let mut arena = Vec::with_capacity(1 + allies.len() + opponents.len());
        arena.push(player);

        let mut ally_ids = Vec::with_capacity(allies.len());
        for ally in allies {
            ally_ids.push(CombatantId(arena.len() as u32));
            arena.push(ally);
        }

        let mut opponent_ids = Vec::with_capacity(opponents.len());
        for opponent in opponents {
            opponent_ids.push(CombatantId(arena.len() as u32));
            arena.push(opponent);
        }

        Self {
            arena,
            player: CombatantId(0),
            allies: ally_ids,
            original_opponents: opponent_ids.clone(),
            opponents: opponent_ids,
        }
    }

    pub fn get(&self, id: CombatantId) -> &Combatant {
        &self.arena[id.0 as usize]
    }

    pub fn get_mut(&mut self, id: CombatantId) -> &mut Combatant {
        &mut self.arena[id.0 as usize]
    }

    pub const fn player_id(&self) -> CombatantId {
        self.player
    }

    /// Hero-side combatants other than the player, in joining order.
    pub fn allies(&self) -> &[CombatantId] {
        &self.allies
    }

    /// Active opponents, in encounter order.
    pub fn opponents(&self) -> &[CombatantId] {
        &self.opponents
    }

    /// The opponent roster as it was at battle start; the basis for rewards.
    pub fn original_opponents(&self) -> &[CombatantId] {
        &self.original_opponents
    }

    /// Hero side in acting order: the player first, then allies.
    pub fn hero_side(&self) -> Vec<CombatantId> {
        let mut side = Vec::with_capacity(1 + self.allies.len());
        side.push(self.player);
        side.extend_from_slice(&self.allies);
        side
    }

    pub fn side_of(&self, id: CombatantId) -> Side {
        if self.opponents.contains(&id) {
            Side::Opponents
        } else {
            Side::Heroes
        }
    }

    /// Moves `target` onto the side `actor` fights for. The player never
    /// changes sides; moving within one side is a no-op.
    pub fn move_to_side_of(&mut self, actor: CombatantId, target: CombatantId) {
        if target == self.player || self.side_of(target) == self.side_of(actor) {
            return;
        }
        match self.side_of(actor) {
            Side::Heroes => {
                self.opponents.retain(|&id| id != target);
                self.allies.push(target);
            }
            Side::Opponents => {
                self.allies.retain(|&id| id != target);
                self.opponents.push(target);
            }
        }
    }

    /// Drops defeated combatants from both active side lists. The player is
    /// never pruned; the original opponent roster is untouched.
    pub fn prune_defeated(&mut self) {
        let arena = &self.arena;
        self.allies
            .retain(|&id| !arena[id.0 as usize].is_defeated());
        self.opponents
            .retain(|&id| !arena[id.0 as usize].is_defeated());
    }

    /// Total gold value of the original opponent roster, including units
    /// later converted or pruned.
    pub fn original_reward(&self) -> u32 {
        self.original_opponents
            .iter()
            .map(|&id| self.get(id).reward())
            .sum()
    }

    /// Tears the roster down, returning the player with whatever health,
    /// statuses, and cooldowns the battle left behind.
    pub fn into_player(mut self) -> Combatant {
        self.arena.swap_remove(self.player.0 as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        Roster::new(
            Combatant::new("Hero", 100, 10),
            vec![Combatant::new("Ally", 60, 8)],
            vec![
                Combatant::new("Drone", 40, 6).with_reward(10),
                Combatant::new("Thug", 50, 7).with_reward(15),
            ],
        )
    }

    #[test]
    fn sides_are_relative_to_the_player() {
        let roster = roster();
        assert_eq!(roster.side_of(roster.player_id()), Side::Heroes);
        assert_eq!(roster.side_of(roster.allies()[0]), Side::Heroes);
        assert_eq!(roster.side_of(roster.opponents()[0]), Side::Opponents);
    }

    #[test]
    fn capture_moves_a_unit_between_sides() {
        let mut roster = roster();
        let drone = roster.opponents()[0];
        roster.move_to_side_of(roster.player_id(), drone);

        assert_eq!(roster.side_of(drone), Side::Heroes);
        assert_eq!(roster.opponents().len(), 1);
        assert_eq!(roster.allies().len(), 2);
        // Rewards still count the full original roster.
        assert_eq!(roster.original_opponents().len(), 2);
        assert_eq!(roster.original_reward(), 25);
    }

    #[test]
    fn the_player_never_changes_sides() {
        let mut roster = roster();
        let drone = roster.opponents()[0];
        roster.move_to_side_of(drone, roster.player_id());
        assert_eq!(roster.side_of(roster.player_id()), Side::Heroes);
    }

    #[test]
    fn prune_removes_defeated_units_but_keeps_rewards() {
        let mut roster = roster();
        let drone = roster.opponents()[0];
        roster.get_mut(drone).take_damage(1_000);
        roster.prune_defeated();

        assert_eq!(roster.opponents().len(), 1);
        assert_eq!(roster.original_reward(), 25);
    }
}

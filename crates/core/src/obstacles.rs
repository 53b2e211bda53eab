//! Obstacle registry - shared bounding boxes used for collision tests.
//!
//! Every collidable entity owns exactly one [`ObstacleGuard`]. The guard keeps
//! the box registered for as long as it lives and unregisters it when dropped,
//! so an owner that finishes, is hit, or is dropped by the scheduler never
//! leaves a stale box behind.
//!
//! Projectiles report hits with [`ObstacleRegistry::record_hit`]; the owner of
//! the struck box picks the report up with [`ObstacleRegistry::drain_hit`].

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Identity of a registered box. Two boxes with equal geometry are distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObstacleId(u64);

/// Axis-aligned box `[row, row + rows) x [column, column + columns)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub id: ObstacleId,
    pub row: f64,
    pub column: f64,
    pub rows: usize,
    pub columns: usize,
}

impl Obstacle {
    pub fn contains_point(&self, row: f64, column: f64) -> bool {
        let rows_hit = self.row <= row && row < self.row + self.rows as f64;
        let columns_hit = self.column <= column && column < self.column + self.columns as f64;
        rows_hit && columns_hit
    }

    /// Outline of the box, for debug drawing.
    pub fn outline(&self) -> String {
        let (rows, columns) = (self.rows.max(1), self.columns.max(1));
        let mut out = String::with_capacity((columns + 1) * rows);
        for y in 0..rows {
            for x in 0..columns {
                let edge_y = y == 0 || y + 1 == rows;
                let edge_x = x == 0 || x + 1 == columns;
                out.push(match (edge_y, edge_x) {
                    (true, true) => '+',
                    (true, false) => '-',
                    (false, true) => '|',
                    (false, false) => ' ',
                });
            }
            out.push('\n');
        }
        out
    }
}

#[derive(Debug, Default)]
struct Arena {
    next_id: u64,
    live: Vec<Obstacle>,
    hits: Vec<ObstacleId>,
}

impl Arena {
    fn position(&self, id: ObstacleId) -> Option<usize> {
        self.live.iter().position(|o| o.id == id)
    }

    fn remove(&mut self, id: ObstacleId) {
        if let Some(i) = self.position(id) {
            self.live.swap_remove(i);
        }
        self.hits.retain(|&h| h != id);
    }
}

/// Set of live obstacles plus the hits recorded against them this tick.
#[derive(Debug, Default)]
pub struct ObstacleRegistry {
    arena: Rc<RefCell<Arena>>,
}

impl ObstacleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a box. It stays registered until the returned guard is dropped.
    #[must_use = "the obstacle is removed as soon as the guard is dropped"]
    pub fn insert(&self, row: f64, column: f64, rows: usize, columns: usize) -> ObstacleGuard {
        let mut arena = self.arena.borrow_mut();
        let id = ObstacleId(arena.next_id);
        arena.next_id += 1;
        arena.live.push(Obstacle {
            id,
            row,
            column,
            rows,
            columns,
        });
        ObstacleGuard {
            id,
            arena: Rc::downgrade(&self.arena),
        }
    }

    /// First obstacle whose box contains the point.
    pub fn contains_point(&self, row: f64, column: f64) -> Option<ObstacleId> {
        self.arena
            .borrow()
            .live
            .iter()
            .find(|o| o.contains_point(row, column))
            .map(|o| o.id)
    }

    /// Report a hit against a live obstacle. Repeated reports collapse into one.
    ///
    /// Returns false when the obstacle is not registered.
    pub fn record_hit(&self, id: ObstacleId) -> bool {
        let mut arena = self.arena.borrow_mut();
        if arena.position(id).is_none() {
            return false;
        }
        if !arena.hits.contains(&id) {
            arena.hits.push(id);
        }
        true
    }

    /// Consume a pending hit report for `id`.
    pub fn drain_hit(&self, id: ObstacleId) -> bool {
        let mut arena = self.arena.borrow_mut();
        match arena.hits.iter().position(|&h| h == id) {
            Some(i) => {
                arena.hits.swap_remove(i);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: ObstacleId) -> Option<Obstacle> {
        let arena = self.arena.borrow();
        arena.position(id).map(|i| arena.live[i])
    }

    pub fn len(&self) -> usize {
        self.arena.borrow().live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn pending_hits(&self) -> usize {
        self.arena.borrow().hits.len()
    }

    /// Copy of all live boxes.
    pub fn snapshot(&self) -> Vec<Obstacle> {
        self.arena.borrow().live.clone()
    }
}

/// Exclusive ownership of one registered obstacle.
#[derive(Debug)]
pub struct ObstacleGuard {
    id: ObstacleId,
    arena: Weak<RefCell<Arena>>,
}

impl ObstacleGuard {
    pub fn id(&self) -> ObstacleId {
        self.id
    }

    /// Move the box so it keeps tracking its owner.
    pub fn move_to(&self, row: f64, column: f64) {
        if let Some(arena) = self.arena.upgrade() {
            let mut arena = arena.borrow_mut();
            if let Some(i) = arena.position(self.id) {
                arena.live[i].row = row;
                arena.live[i].column = column;
            }
        }
    }
}

impl Drop for ObstacleGuard {
    fn drop(&mut self) {
        if let Some(arena) = self.arena.upgrade() {
            arena.borrow_mut().remove(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_point_is_half_open() {
        let reg = ObstacleRegistry::new();
        let guard = reg.insert(2.0, 3.0, 2, 4);
        assert_eq!(reg.contains_point(2.0, 3.0), Some(guard.id()));
        assert_eq!(reg.contains_point(3.9, 6.9), Some(guard.id()));
        assert_eq!(reg.contains_point(4.0, 3.0), None);
        assert_eq!(reg.contains_point(2.0, 7.0), None);
        assert_eq!(reg.contains_point(1.9, 3.0), None);
    }

    #[test]
    fn equal_geometry_gives_distinct_identities() {
        let reg = ObstacleRegistry::new();
        let a = reg.insert(0.0, 0.0, 1, 1);
        let b = reg.insert(0.0, 0.0, 1, 1);
        assert_ne!(a.id(), b.id());
        assert_eq!(reg.len(), 2);
        drop(a);
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.contains_point(0.0, 0.0), Some(b.id()));
    }

    #[test]
    fn hit_is_drained_once_and_only_by_id() {
        let reg = ObstacleRegistry::new();
        let a = reg.insert(0.0, 0.0, 1, 1);
        let b = reg.insert(5.0, 5.0, 1, 1);
        assert!(reg.record_hit(a.id()));
        assert!(reg.record_hit(a.id()));
        assert_eq!(reg.pending_hits(), 1);
        assert!(!reg.drain_hit(b.id()));
        assert!(reg.drain_hit(a.id()));
        assert!(!reg.drain_hit(a.id()));
    }

    #[test]
    fn dropping_guard_clears_pending_hit() {
        let reg = ObstacleRegistry::new();
        let a = reg.insert(0.0, 0.0, 1, 1);
        let id = a.id();
        reg.record_hit(id);
        drop(a);
        assert_eq!(reg.pending_hits(), 0);
        assert!(!reg.record_hit(id));
        assert!(reg.is_empty());
    }

    #[test]
    fn guard_moves_its_box() {
        let reg = ObstacleRegistry::new();
        let g = reg.insert(0.0, 4.0, 2, 2);
        g.move_to(10.5, 4.0);
        assert_eq!(reg.get(g.id()).map(|o| o.row), Some(10.5));
        assert_eq!(reg.contains_point(11.0, 5.0), Some(g.id()));
        assert_eq!(reg.contains_point(0.0, 4.0), None);
    }

    #[test]
    fn guard_outliving_registry_is_harmless() {
        let reg = ObstacleRegistry::new();
        let g = reg.insert(0.0, 0.0, 1, 1);
        drop(reg);
        g.move_to(1.0, 1.0);
        drop(g);
    }

    #[test]
    fn outline_draws_box_edges() {
        let reg = ObstacleRegistry::new();
        let g = reg.insert(0.0, 0.0, 3, 3);
        let o = reg.get(g.id()).unwrap();
        assert_eq!(o.outline(), "+-+\n| |\n+-+\n");
    }
}

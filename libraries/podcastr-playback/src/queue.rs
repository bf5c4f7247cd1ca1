//! Episode queue with a current position
//!
//! Navigation is index based and non-destructive: moving forward or back
//! never removes episodes, so previous always returns to the same item.

use podcastr_core::Episode;

/// Ordered episodes plus the position of the current one
///
/// Invariant: `current_index < episodes.len()` whenever the queue is not
/// empty. An empty queue always has `current_index == 0` and no current
/// episode.
#[derive(Debug, Clone, Default)]
pub struct Queue {
    episodes: Vec<Episode>,
    current_index: usize,
}

impl Queue {
    /// Create new empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the queue with a single episode
    pub fn set_single(&mut self, episode: Episode) {
        self.episodes = vec![episode];
        self.current_index = 0;
    }

    /// Replace the queue wholesale
    ///
    /// Returns `false` and leaves the queue untouched when `index` does not
    /// address an element of `episodes`.
    pub fn replace(&mut self, episodes: Vec<Episode>, index: usize) -> bool {
        if index >= episodes.len() {
            return false;
        }
        self.episodes = episodes;
        self.current_index = index;
        true
    }

    /// Clear entire queue
    pub fn clear(&mut self) {
        self.episodes.clear();
        self.current_index = 0;
    }

    /// Episode at the current position
    pub fn current(&self) -> Option<&Episode> {
        self.episodes.get(self.current_index)
    }

    /// Current position (0 when empty)
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// All episodes in queue order
    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    /// Total number of episodes in queue
    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    /// Check if queue is empty
    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    /// Check if there is an episode before the current one
    pub fn can_go_back(&self) -> bool {
        self.current_index > 0
    }

    /// Check if there is an episode after the current one, in queue order
    pub fn can_advance(&self) -> bool {
        self.current_index + 1 < self.episodes.len()
    }

    /// Move one position forward; no-op at the end
    pub fn advance(&mut self) -> bool {
        if self.can_advance() {
            self.current_index += 1;
            true
        } else {
            false
        }
    }

    /// Move one position back; no-op at the start
    pub fn go_back(&mut self) -> bool {
        if self.can_go_back() {
            self.current_index -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to an arbitrary position
    ///
    /// Out-of-range indices are ignored.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index < self.episodes.len() {
            self.current_index = index;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn create_test_episode(id: &str) -> Episode {
        Episode::new(
            id,
            format!("Episode {}", id),
            format!("https://cdn.example.com/{}.m4a", id),
            Duration::from_secs(1800),
        )
    }

    fn three_episodes() -> Vec<Episode> {
        vec![
            create_test_episode("a"),
            create_test_episode("b"),
            create_test_episode("c"),
        ]
    }

    #[test]
    fn create_empty_queue() {
        let queue = Queue::new();
        assert_eq!(queue.len(), 0);
        assert!(queue.is_empty());
        assert!(queue.current().is_none());
        assert_eq!(queue.current_index(), 0);
    }

    #[test]
    fn set_single_resets_position() {
        let mut queue = Queue::new();
        queue.replace(three_episodes(), 2);

        queue.set_single(create_test_episode("z"));

        assert_eq!(queue.len(), 1);
        assert_eq!(queue.current_index(), 0);
        assert_eq!(queue.current().unwrap().id.as_str(), "z");
    }

    #[test]
    fn replace_rejects_out_of_range_index() {
        let mut queue = Queue::new();
        queue.set_single(create_test_episode("keep"));

        assert!(!queue.replace(three_episodes(), 3));
        assert!(!queue.replace(Vec::new(), 0));

        // Untouched
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.current().unwrap().id.as_str(), "keep");
    }

    #[test]
    fn advance_stops_at_end() {
        let mut queue = Queue::new();
        queue.replace(three_episodes(), 1);

        assert!(queue.advance());
        assert_eq!(queue.current_index(), 2);

        assert!(!queue.advance());
        assert_eq!(queue.current_index(), 2);
    }

    #[test]
    fn go_back_stops_at_start() {
        let mut queue = Queue::new();
        queue.replace(three_episodes(), 1);

        assert!(queue.go_back());
        assert_eq!(queue.current_index(), 0);

        assert!(!queue.go_back());
        assert_eq!(queue.current_index(), 0);
    }

    #[test]
    fn jump_to_ignores_out_of_range() {
        let mut queue = Queue::new();
        queue.replace(three_episodes(), 0);

        assert!(queue.jump_to(2));
        assert_eq!(queue.current().unwrap().id.as_str(), "c");

        assert!(!queue.jump_to(3));
        assert_eq!(queue.current_index(), 2);
    }

    #[test]
    fn clear_queue() {
        let mut queue = Queue::new();
        queue.replace(three_episodes(), 2);

        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.current_index(), 0);
        assert!(queue.current().is_none());
        assert!(!queue.can_advance());
        assert!(!queue.can_go_back());
    }
}

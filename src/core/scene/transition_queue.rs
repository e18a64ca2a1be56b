//=========================================================================
// Transition Queue
//=========================================================================
//
// Scene triggers raised between ticks (UI clicks, host requests).
//
// The scene controller drains this queue at the start of its next tick,
// so a transition never lands in the middle of a simulation step.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::SceneTrigger;

//=== TransitionQueue =====================================================

#[derive(Debug, Default)]
pub struct TransitionQueue {
    queue: Vec<SceneTrigger>,
}

impl TransitionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a trigger for the next tick boundary.
    pub fn push(&mut self, trigger: SceneTrigger) {
        self.queue.push(trigger);
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Takes all queued triggers in arrival order, leaving the queue empty.
    pub fn take(&mut self) -> Vec<SceneTrigger> {
        std::mem::take(&mut self.queue)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_preserves_order_and_empties() {
        let mut queue = TransitionQueue::new();
        queue.push(SceneTrigger::Start);
        queue.push(SceneTrigger::QuitToMenu);
        assert_eq!(queue.len(), 2);

        assert_eq!(
            queue.take(),
            vec![SceneTrigger::Start, SceneTrigger::QuitToMenu]
        );
        assert!(queue.is_empty());
    }
}

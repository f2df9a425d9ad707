use serde::{Deserialize, Serialize};

pub type TaskId = u64;

/// Estado de una recogida: Pending -> Assigned -> Collected -> Delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Assigned,
    Collected,
    Delivered,
    Cancelled,
}

impl TaskStatus {
    /// Siguiente paso al reportar progreso
    pub fn next(&self) -> Option<TaskStatus> {
        match self {
            TaskStatus::Assigned => Some(TaskStatus::Collected),
            TaskStatus::Collected => Some(TaskStatus::Delivered),
            TaskStatus::Pending | TaskStatus::Delivered | TaskStatus::Cancelled => None,
        }
    }

    pub fn is_final(&self) -> bool {
        matches!(self, TaskStatus::Delivered | TaskStatus::Cancelled)
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::Assigned => "Assigned",
            TaskStatus::Collected => "Collected",
            TaskStatus::Delivered => "Delivered",
            TaskStatus::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskScope {
    /// Todas las tareas del helper
    Mine,
    /// Solo tareas pendientes, sin asignar
    Open,
}

impl TaskScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskScope::Mine => "mine",
            TaskScope::Open => "open",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub status: TaskStatus,
    pub item_description: String,
    pub requester_name: String,
    #[serde(default)]
    pub green_coins_reward: u32,
    #[serde(default)]
    pub is_urgent: bool,
    pub pickup_address: String,
    pub dropoff_address: String,
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default)]
    pub assigned_helper: Option<String>,
    #[serde(default)]
    pub scheduled_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_walks_the_pickup_lifecycle() {
        assert_eq!(TaskStatus::Pending.next(), None);
        assert_eq!(TaskStatus::Assigned.next(), Some(TaskStatus::Collected));
        assert_eq!(TaskStatus::Collected.next(), Some(TaskStatus::Delivered));
        assert!(TaskStatus::Delivered.is_final());
        assert!(!TaskStatus::Collected.is_final());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    AuthSubmit,
    BackgroundLoad,
    LogoLoad,
}

#[derive(Debug)]
pub struct TaskCompleted<E> {
    pub id: TaskId,
    pub result: E,
}

/// Task lifecycle state (stored in AppState, mutated only by reducer).
#[derive(Debug, Default, Clone)]
pub struct TaskState {
    pub active: Option<TaskId>,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn on_started(&mut self, id: TaskId) {
        self.active = Some(id);
    }

    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.active = None;
        }
        ok
    }
}

#[derive(Debug, Default, Clone)]
pub struct Tasks {
    pub auth_submit: TaskState,
    pub background_load: TaskState,
    pub logo_load: TaskState,
}

impl Tasks {
    pub fn state(&self, kind: TaskKind) -> &TaskState {
        match kind {
            TaskKind::AuthSubmit => &self.auth_submit,
            TaskKind::BackgroundLoad => &self.background_load,
            TaskKind::LogoLoad => &self.logo_load,
        }
    }

    pub fn state_mut(&mut self, kind: TaskKind) -> &mut TaskState {
        match kind {
            TaskKind::AuthSubmit => &mut self.auth_submit,
            TaskKind::BackgroundLoad => &mut self.background_load,
            TaskKind::LogoLoad => &mut self.logo_load,
        }
    }

    pub fn is_any_running(&self) -> bool {
        self.auth_submit.is_running()
            || self.background_load.is_running()
            || self.logo_load.is_running()
    }
}

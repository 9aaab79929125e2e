use crate::shape::Mesh;
use crate::transformation::voxelization::{
    Voxelization, VoxelizationError, VoxelizationErrorKind, Voxelizer, VoxelizerConfig,
};
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;

/// A flag shared between a voxelization and the code that may want to interrupt it.
///
/// Cloning the token yields a handle to the same flag. Once cancelled, a token stays cancelled.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    /// A new token, not cancelled yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests the cancellation of every voxelization sharing this token.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Was [`CancellationToken::cancel`] called on this token or on one of its clones?
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// The progress of a voxelization.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum VoxelizerState {
    /// The grid is computed but no cell was classified yet.
    Idle = 0,
    /// The cells are being classified.
    Scanning = 1,
    /// The occupied cells are being collected and merged into boxes.
    Aggregating = 2,
    /// The voxelization succeeded.
    Done = 3,
    /// The voxelization failed or was cancelled.
    Failed = 4,
}

impl VoxelizerState {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Idle,
            1 => Self::Scanning,
            2 => Self::Aggregating,
            3 => Self::Done,
            _ => Self::Failed,
        }
    }
}

/// The state of a voxelization, readable from other threads.
#[derive(Clone, Debug)]
pub(crate) struct SharedState(Arc<AtomicU8>);

impl SharedState {
    pub fn new() -> Self {
        Self(Arc::new(AtomicU8::new(VoxelizerState::Idle as u8)))
    }

    pub fn get(&self) -> VoxelizerState {
        VoxelizerState::from_u8(self.0.load(Ordering::Acquire))
    }

    pub fn set(&self, state: VoxelizerState) {
        self.0.store(state as u8, Ordering::Release);
    }
}

/// A voxelization running on its own thread.
///
/// Created by [`Voxelizer::spawn`]. Dropping the task detaches the thread; call
/// [`VoxelizationTask::cancel`] first to stop it early.
#[derive(Debug)]
pub struct VoxelizationTask {
    mesh: String,
    handle: JoinHandle<Result<Voxelization, VoxelizationError>>,
    token: CancellationToken,
    state: SharedState,
}

impl Voxelizer<'_> {
    /// Voxelizes `mesh` on a new thread.
    ///
    /// Errors, including an invalid configuration, are reported by [`VoxelizationTask::join`].
    pub fn spawn(mesh: Arc<Mesh>, config: VoxelizerConfig) -> VoxelizationTask {
        let token = CancellationToken::new();
        let state = SharedState::new();
        let name = mesh.name().to_string();

        let handle = {
            let token = token.clone();
            let state = state.clone();
            std::thread::spawn(move || match Voxelizer::new(&mesh, config) {
                Ok(voxelizer) => voxelizer
                    .with_cancellation_token(token)
                    .with_shared_state(state)
                    .run(),
                Err(e) => {
                    state.set(VoxelizerState::Failed);
                    Err(e)
                }
            })
        };

        VoxelizationTask {
            mesh: name,
            handle,
            token,
            state,
        }
    }
}

impl VoxelizationTask {
    /// The name of the mesh being voxelized.
    pub fn mesh_name(&self) -> &str {
        &self.mesh
    }

    /// The current progress of the voxelization.
    pub fn state(&self) -> VoxelizerState {
        self.state.get()
    }

    /// Requests the voxelization to stop as soon as possible.
    ///
    /// [`VoxelizationTask::join`] will then return a [`VoxelizationErrorKind::Cancelled`] error,
    /// unless the voxelization was already complete.
    pub fn cancel(&self) {
        self.token.cancel()
    }

    /// The token controlling the cancellation of this task.
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.token
    }

    /// Has the thread running the voxelization finished?
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the voxelization to complete.
    pub fn join(self) -> Result<Voxelization, VoxelizationError> {
        match self.handle.join() {
            Ok(result) => result,
            Err(_) => {
                self.state.set(VoxelizerState::Failed);
                log::error!("Voxelization task of mesh {} panicked.", self.mesh);
                Err(VoxelizationError::new(
                    self.mesh,
                    VoxelizationErrorKind::TaskPanicked,
                ))
            }
        }
    }

    /// Returns the result of the voxelization if it is finished, or gives the task back
    /// otherwise.
    pub fn try_join(self) -> Result<Result<Voxelization, VoxelizationError>, Self> {
        if self.is_finished() {
            Ok(self.join())
        } else {
            Err(self)
        }
    }
}

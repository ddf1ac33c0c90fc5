//! Tasks sub-client — task CRUD.

use crate::client::FocusFlowClient;
use crate::domain::task::wire::{CreateTaskRequest, Task, TaskStatus, UpdateTaskRequest};
use crate::error::SdkError;

pub struct Tasks<'a> {
    pub(crate) client: &'a FocusFlowClient,
}

impl<'a> Tasks<'a> {
    /// List all tasks for the authenticated user.
    pub async fn list(&self) -> Result<Vec<Task>, SdkError> {
        Ok(self.client.http.get_tasks().await?)
    }

    /// Create a task.
    pub async fn create(&self, request: &CreateTaskRequest) -> Result<Task, SdkError> {
        Ok(self.client.http.create_task(request).await?)
    }

    /// Update a task. Unset fields keep their current values.
    pub async fn update(&self, id: u64, request: &UpdateTaskRequest) -> Result<Task, SdkError> {
        Ok(self.client.http.update_task(id, request).await?)
    }

    /// Mark a task completed.
    pub async fn complete(&self, id: u64) -> Result<Task, SdkError> {
        let request = UpdateTaskRequest {
            status: Some(TaskStatus::Completed),
            ..Default::default()
        };
        self.update(id, &request).await
    }

    /// Delete a task.
    pub async fn delete(&self, id: u64) -> Result<(), SdkError> {
        self.client.http.delete_task(id).await?;
        Ok(())
    }
}

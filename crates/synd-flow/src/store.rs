//! # Draft Store Bindings
//!
//! [`DraftStore`] is the persistence seam the step controller drives:
//! fetch the most recent draft (absence is normal, not an error), create
//! on first persist, update thereafter. Each wizard binds the seam to its
//! platform sub-client; the controller never sees endpoint shapes.

use std::sync::Arc;

use async_trait::async_trait;

use synd_client::{ApiError, DraftFields, FileUpload, PlatformClient};
use synd_core::{ProfileId, SpvId, SyndicateId};

use crate::draft::RecordId;

/// Async persistence seam for one wizard's draft record.
#[async_trait]
pub trait DraftStore: Send + Sync {
    /// Fetch the most recent draft, or `None` when no draft exists yet.
    /// `None` is the normal first-visit condition; abnormal failures
    /// (network, auth) surface as errors.
    async fn fetch(&self) -> Result<Option<(RecordId, DraftFields)>, ApiError>;

    /// Create the draft from one step's fields, returning the assigned
    /// id. The caller retains that id for every subsequent step.
    async fn create(
        &self,
        fields: &DraftFields,
        file: Option<&FileUpload>,
    ) -> Result<RecordId, ApiError>;

    /// Update one step's fields on the existing draft. Only supplied
    /// fields change; omitted fields are preserved server-side.
    async fn update(
        &self,
        id: RecordId,
        fields: &DraftFields,
        file: Option<&FileUpload>,
    ) -> Result<(), ApiError>;
}

/// Binds the onboarding wizard to `/profiles/`.
#[derive(Debug, Clone)]
pub struct ProfileDraftStore {
    client: Arc<PlatformClient>,
    step: u8,
}

impl ProfileDraftStore {
    /// Bind one onboarding step (1-based, matching the endpoint suffix).
    pub fn new(client: Arc<PlatformClient>, step: u8) -> Self {
        Self { client, step }
    }
}

#[async_trait]
impl DraftStore for ProfileDraftStore {
    async fn fetch(&self) -> Result<Option<(RecordId, DraftFields)>, ApiError> {
        let profiles = self.client.profiles().list().await?;
        Ok(profiles
            .into_iter()
            .next()
            .map(|record| (RecordId::from_uuid(*record.id.as_uuid()), record.fields)))
    }

    async fn create(
        &self,
        fields: &DraftFields,
        file: Option<&FileUpload>,
    ) -> Result<RecordId, ApiError> {
        let record = self.client.profiles().create(fields, file).await?;
        Ok(RecordId::from_uuid(*record.id.as_uuid()))
    }

    async fn update(
        &self,
        id: RecordId,
        fields: &DraftFields,
        file: Option<&FileUpload>,
    ) -> Result<(), ApiError> {
        self.client
            .profiles()
            .update_step(ProfileId::from_uuid(*id.as_uuid()), self.step, fields, file)
            .await?;
        Ok(())
    }
}

/// Binds the syndicate-creation wizard to `/syndicate/step{n}/`.
#[derive(Debug, Clone)]
pub struct SyndicateDraftStore {
    client: Arc<PlatformClient>,
    step: u8,
}

impl SyndicateDraftStore {
    /// Bind one syndicate step (1-based, matching the endpoint suffix).
    pub fn new(client: Arc<PlatformClient>, step: u8) -> Self {
        Self { client, step }
    }
}

#[async_trait]
impl DraftStore for SyndicateDraftStore {
    async fn fetch(&self) -> Result<Option<(RecordId, DraftFields)>, ApiError> {
        let draft = self.client.syndicates().get_draft().await?;
        Ok(draft.map(|record| (RecordId::from_uuid(*record.id.as_uuid()), record.fields)))
    }

    async fn create(
        &self,
        fields: &DraftFields,
        file: Option<&FileUpload>,
    ) -> Result<RecordId, ApiError> {
        let record = self
            .client
            .syndicates()
            .submit_step(self.step, fields, file)
            .await?;
        Ok(RecordId::from_uuid(*record.id.as_uuid()))
    }

    async fn update(
        &self,
        id: RecordId,
        fields: &DraftFields,
        file: Option<&FileUpload>,
    ) -> Result<(), ApiError> {
        self.client
            .syndicates()
            .update_step(
                SyndicateId::from_uuid(*id.as_uuid()),
                self.step,
                fields,
                file,
            )
            .await?;
        Ok(())
    }
}

/// Binds the SPV-creation wizard to `/spv/`.
///
/// A brand-new SPV has no id to probe, so the store is constructed either
/// blank (first visit) or with the id carried in the flow's handoff state
/// (resume).
#[derive(Debug, Clone)]
pub struct SpvDraftStore {
    client: Arc<PlatformClient>,
    spv_id: Option<SpvId>,
    step: u8,
}

impl SpvDraftStore {
    /// Bind one SPV step with no draft to resume.
    pub fn new(client: Arc<PlatformClient>, step: u8) -> Self {
        Self {
            client,
            spv_id: None,
            step,
        }
    }

    /// Bind one SPV step resuming the draft with the given id.
    pub fn resuming(client: Arc<PlatformClient>, spv_id: SpvId, step: u8) -> Self {
        Self {
            client,
            spv_id: Some(spv_id),
            step,
        }
    }
}

#[async_trait]
impl DraftStore for SpvDraftStore {
    async fn fetch(&self) -> Result<Option<(RecordId, DraftFields)>, ApiError> {
        let Some(spv_id) = self.spv_id else {
            return Ok(None);
        };
        let record = self.client.spv().get(spv_id).await?;
        Ok(record.map(|r| (RecordId::from_uuid(*r.id.as_uuid()), r.fields)))
    }

    async fn create(
        &self,
        fields: &DraftFields,
        file: Option<&FileUpload>,
    ) -> Result<RecordId, ApiError> {
        let record = self.client.spv().create(fields, file).await?;
        Ok(RecordId::from_uuid(*record.id.as_uuid()))
    }

    async fn update(
        &self,
        id: RecordId,
        fields: &DraftFields,
        file: Option<&FileUpload>,
    ) -> Result<(), ApiError> {
        self.client
            .spv()
            .update_step(SpvId::from_uuid(*id.as_uuid()), self.step, fields, file)
            .await?;
        Ok(())
    }
}

//! Data access layer for forms and questions
//!
//! `FormStore` wraps the MongoDB client and database handles and exposes the
//! form operations as methods. It is constructed once at startup and handed
//! down through the application state; handlers never touch the driver
//! directly.
//!
//! Multi-step mutations (update form + replace questions, delete form +
//! cascade) are independent store calls without a transaction. A fault
//! between steps leaves partial state; last write wins between concurrent
//! clients.

use std::collections::HashSet;

use bson::{doc, Bson};
use chrono::Utc;
use futures_util::TryStreamExt;
use mongodb::options::{UpdateOneModel, WriteModel};
use mongodb::{Client, Collection, Database};

use crate::backend::error::BackendError;
use crate::backend::forms::ident;
use crate::shared::envelope::ApiEnvelope;
use crate::shared::messages;
use crate::shared::requests::{
    DeleteFormRequest, FetchFormRequest, SaveFormData, SaveFormRequest, SubmitAnswersRequest,
};
use crate::shared::{Form, Question};

/// Collection holding form documents
pub const FORMS_COLLECTION: &str = "forms";

/// Collection holding question documents, one per question per form
pub const QUESTIONS_COLLECTION: &str = "formquestions";

/// MongoDB-backed store for forms and their questions
#[derive(Clone)]
pub struct FormStore {
    client: Client,
    db: Database,
}

impl FormStore {
    /// Wrap an already-constructed client, targeting `db_name`.
    pub fn new(client: Client, db_name: &str) -> Self {
        let db = client.database(db_name);
        Self { client, db }
    }

    fn forms(&self) -> Collection<Form> {
        self.db.collection(FORMS_COLLECTION)
    }

    fn questions(&self) -> Collection<Question> {
        self.db.collection(QUESTIONS_COLLECTION)
    }

    /// Return all stored forms unmodified. Success iff the list is non-empty.
    pub async fn list_forms(&self) -> Result<ApiEnvelope<Vec<Form>>, BackendError> {
        let forms: Vec<Form> = self.forms().find(doc! {}).await?.try_collect().await?;
        if forms.is_empty() {
            Ok(ApiEnvelope::fail(messages::NO_FORMS_FOUND))
        } else {
            Ok(ApiEnvelope::ok(messages::FORMS_LOADED, forms))
        }
    }

    /// Look up one form and its questions (sorted by `order` ascending).
    ///
    /// The form and question lookups run concurrently. The returned form's
    /// `questions` field is always overwritten from the question query; a
    /// stored field of that name is never trusted.
    pub async fn fetch_form(
        &self,
        req: &FetchFormRequest,
    ) -> Result<ApiEnvelope<Form>, BackendError> {
        let form_id = req.form_id.as_str();
        let (form, questions) = tokio::try_join!(
            async { self.forms().find_one(doc! { "formId": form_id }).await },
            async {
                self.questions()
                    .find(doc! { "formId": form_id })
                    .sort(doc! { "order": 1 })
                    .await?
                    .try_collect::<Vec<Question>>()
                    .await
            }
        )?;

        let Some(mut form) = form else {
            return Ok(ApiEnvelope::fail(messages::INVALID_RECORD_ID_FETCH));
        };
        form.questions = questions;
        if form.questions.is_empty() {
            Ok(ApiEnvelope::ok(messages::NO_QUESTIONS_FOR_FORM, form))
        } else {
            Ok(ApiEnvelope::ok(messages::FORM_LOADED, form))
        }
    }

    /// Create a form or replace an existing one, depending on `update_only`.
    pub async fn save_form(
        &self,
        req: SaveFormRequest,
    ) -> Result<ApiEnvelope<SaveFormData>, BackendError> {
        if let Err(message) = req.validate() {
            return Ok(ApiEnvelope::fail(message));
        }
        if req.update_only {
            self.update_form(req).await
        } else {
            self.create_form(req).await
        }
    }

    /// Create path: fresh form id, fresh question ids, bulk insert.
    async fn create_form(
        &self,
        req: SaveFormRequest,
    ) -> Result<ApiEnvelope<SaveFormData>, BackendError> {
        if self
            .forms()
            .find_one(doc! { "title": &req.title })
            .await?
            .is_some()
        {
            return Ok(ApiEnvelope::fail(messages::DUPLICATE_FORM_TITLE));
        }

        let existing = self.forms().distinct("formId", doc! {}).await?;
        let taken: HashSet<String> = existing
            .into_iter()
            .filter_map(|b| b.as_str().map(str::to_owned))
            .collect();
        let form_id = ident::generate_record_id(&taken)?;

        let form = Form::new(form_id.clone(), req.title, req.description);
        self.forms().insert_one(&form).await?;

        // Question ids are collision-checked within this batch only.
        let mut batch_ids: HashSet<String> = HashSet::new();
        let mut questions = Vec::with_capacity(req.questions.len());
        for mut question in req.questions {
            let question_id = ident::generate_record_id(&batch_ids)?;
            batch_ids.insert(question_id.clone());
            question.id = None;
            question.question_id = question_id;
            question.form_id = form_id.clone();
            question.is_taken = false;
            questions.push(question);
        }
        let inserted = self.questions().insert_many(&questions).await?;
        if inserted.inserted_ids.is_empty() {
            // An acknowledged form insert alone still counts as success.
            tracing::warn!(form_id = %form_id, "form created but no questions were inserted");
        }
        Ok(ApiEnvelope::ok(
            messages::FORM_CREATED,
            SaveFormData { form_id },
        ))
    }

    /// Update path: mutate the form's fields, then replace its question set
    /// wholesale (delete all, re-insert the incoming list).
    async fn update_form(
        &self,
        req: SaveFormRequest,
    ) -> Result<ApiEnvelope<SaveFormData>, BackendError> {
        let form_id = req.form_id.clone().unwrap_or_default();
        if self
            .forms()
            .find_one(doc! { "formId": &form_id })
            .await?
            .is_none()
        {
            return Ok(ApiEnvelope::fail(messages::INVALID_RECORD_ID_UPDATE));
        }

        // formId and createdAt are preserved.
        self.forms()
            .update_one(
                doc! { "formId": &form_id },
                doc! { "$set": {
                    "title": &req.title,
                    "description": &req.description,
                    "updatedAt": Utc::now().to_rfc3339(),
                }},
            )
            .await?;

        self.questions()
            .delete_many(doc! { "formId": &form_id })
            .await?;

        // Incoming questions keep their identifier when they have one;
        // the rest get fresh ids, collision-checked against every id seen
        // so far in this batch.
        let mut seen: HashSet<String> = HashSet::new();
        let mut questions = Vec::with_capacity(req.questions.len());
        for mut question in req.questions {
            let question_id = if question.question_id.trim().is_empty() {
                ident::generate_record_id(&seen)?
            } else {
                question.question_id.clone()
            };
            seen.insert(question_id.clone());
            question.id = None;
            question.question_id = question_id;
            question.form_id = form_id.clone();
            question.is_taken = false;
            questions.push(question);
        }
        let inserted = self.questions().insert_many(&questions).await?;
        if inserted.inserted_ids.is_empty() {
            return Ok(ApiEnvelope::fail(messages::GENERIC_FAILURE));
        }
        Ok(ApiEnvelope::ok(
            messages::FORM_UPDATED,
            SaveFormData { form_id },
        ))
    }

    /// Apply a respondent's answers as one bulk write.
    ///
    /// Each question carrying a store `_id` becomes one update that sets the
    /// answer, rewrites `order` to the submitted position, and derives
    /// `isTaken`/`takenAt` from the trimmed answer. Questions without an
    /// `_id` are skipped.
    pub async fn submit_answers(
        &self,
        req: &SubmitAnswersRequest,
    ) -> Result<ApiEnvelope<()>, BackendError> {
        let namespace = self.questions().namespace();
        let now = Utc::now();

        let mut writes = Vec::with_capacity(req.questions.len());
        for (position, question) in req.questions.iter().enumerate() {
            let Some(doc_id) = question.id else { continue };
            let taken = Question::answer_is_taken(question.answer.as_deref());
            let update = doc! { "$set": {
                "answer": question.answer.clone(),
                "order": position as i32,
                "isTaken": taken,
                "takenAt": if taken {
                    Bson::String(now.to_rfc3339())
                } else {
                    Bson::Null
                },
            }};
            writes.push(WriteModel::UpdateOne(
                UpdateOneModel::builder()
                    .namespace(namespace.clone())
                    .filter(doc! { "_id": doc_id })
                    .update(update)
                    .build(),
            ));
        }
        if writes.is_empty() {
            return Ok(ApiEnvelope::fail(messages::NO_QUESTIONS));
        }

        let result = self.client.bulk_write(writes).await?;
        if result.modified_count > 0 {
            Ok(ApiEnvelope::ok_empty(messages::ANSWERS_SAVED))
        } else {
            Ok(ApiEnvelope::fail(messages::NO_ANSWERS_SAVED))
        }
    }

    /// Delete a form and cascade-delete its questions.
    pub async fn delete_form(
        &self,
        req: &DeleteFormRequest,
    ) -> Result<ApiEnvelope<()>, BackendError> {
        if req.form_id.trim().is_empty() {
            return Ok(ApiEnvelope::fail(messages::RECORD_ID_NOT_FOUND));
        }
        let deleted = self
            .forms()
            .delete_one(doc! { "formId": &req.form_id })
            .await?;
        if deleted.deleted_count == 0 {
            return Ok(ApiEnvelope::fail(messages::INVALID_FORM_ID));
        }
        let cascade = self
            .questions()
            .delete_many(doc! { "formId": &req.form_id })
            .await?;
        tracing::debug!(
            form_id = %req.form_id,
            questions = cascade.deleted_count,
            "cascade-deleted questions"
        );
        Ok(ApiEnvelope::ok_empty(messages::FORM_DELETED))
    }

    /// Number of stored forms, for the health endpoint.
    pub async fn count_forms(&self) -> Result<u64, BackendError> {
        Ok(self.forms().count_documents(doc! {}).await?)
    }
}

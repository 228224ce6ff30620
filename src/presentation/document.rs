/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::application::connection::Connection;
use crate::application::interfaces::preparation::PreparationService;
use crate::application::interfaces::workflow::WorkflowService;
use crate::error::{AppError, ShResult};
use crate::model::http::ApiResponse;
use crate::presentation::workflow::{CertifyPolicy, DocumentDetails, WorkflowDetails};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Field name to field properties, as returned by the document fields endpoint
pub type FieldMap = Map<String, Value>;

fn parse_fields(response: &ApiResponse) -> ShResult<FieldMap> {
    match response.json::<Value>()? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(FieldMap::new()),
        other => Err(AppError::Deserialization(format!(
            "document fields should be an object, got {other}"
        ))),
    }
}

/// One page of a [`Document`]
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize)]
pub struct Page {
    package_id: i64,
    document_id: i64,
    number: u32,
    fields: FieldMap,
}

impl Page {
    /// Page `number` (1-based) of a document
    #[must_use]
    pub fn new(package_id: i64, document_id: i64, number: u32) -> Self {
        Self {
            package_id,
            document_id,
            number,
            fields: FieldMap::new(),
        }
    }

    /// Identifier of the owning package
    #[must_use]
    pub fn package_id(&self) -> i64 {
        self.package_id
    }

    /// Identifier of the owning document
    #[must_use]
    pub fn document_id(&self) -> i64 {
        self.document_id
    }

    /// 1-based page number
    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Fields placed on the page, empty until fetched
    #[must_use]
    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    /// Fetches the fields of this page
    ///
    /// The field map is cleared before the error is returned when the call does not succeed
    /// or its body is not a field map.
    pub async fn fetch_fields(&mut self, connection: &Connection) -> ShResult<ApiResponse> {
        let response = match connection
            .get_document_fields(self.package_id, self.document_id, self.number)
            .await
        {
            Ok(response) => response,
            Err(e) => {
                self.fields.clear();
                return Err(e);
            }
        };
        match response.error_for_status().and_then(parse_fields) {
            Ok(fields) => {
                self.fields = fields;
                Ok(response)
            }
            Err(e) => {
                warn!(
                    "Fields of page {} of document {} could not be loaded: {e}",
                    self.number, self.document_id
                );
                self.fields.clear();
                Err(e)
            }
        }
    }
}

/// A document inside a package
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize)]
pub struct Document {
    package_id: i64,
    id: i64,
    name: Option<String>,
    document_type: Option<String>,
    order: Option<i64>,
    source: Option<String>,
    height: Option<f64>,
    width: Option<f64>,
    page_count: u32,
    created_on: Option<String>,
    modified_on: Option<String>,
    form_fields: Value,
    template: Value,
    certify: CertifyPolicy,
    lock_form_fields: Option<bool>,
    locked: Option<bool>,
    pages: Vec<Page>,
    page_properties: BTreeMap<u32, FieldMap>,
}

impl Document {
    /// Document known only by identifier, hydrated later
    #[must_use]
    pub fn new(package_id: i64, id: i64) -> Self {
        Self {
            package_id,
            id,
            name: None,
            document_type: None,
            order: None,
            source: None,
            height: None,
            width: None,
            page_count: 0,
            created_on: None,
            modified_on: None,
            form_fields: Value::Null,
            template: Value::Null,
            certify: CertifyPolicy::default(),
            lock_form_fields: None,
            locked: None,
            pages: Vec::new(),
            page_properties: BTreeMap::new(),
        }
    }

    pub(crate) fn from_details(package_id: i64, details: &DocumentDetails) -> Self {
        let mut document = Self::new(package_id, details.document_id);
        document.apply(details);
        document
    }

    fn apply(&mut self, details: &DocumentDetails) {
        self.name = details.document_name.clone();
        self.document_type = details.document_type.clone();
        self.order = details.document_order;
        self.source = details.document_source.clone();
        self.height = details.document_height;
        self.width = details.document_width;
        self.page_count = details.document_pages;
        self.created_on = details.created_on.clone();
        self.modified_on = details.modified_on.clone();
        self.form_fields = details.form_fields.clone();
        self.template = details.template.clone();
        self.certify = details.certify.clone();
        self.lock_form_fields = details.lock_form_fields;
        self.locked = details.locked;
        self.pages = (1..=self.page_count)
            .map(|number| Page::new(self.package_id, self.id, number))
            .collect();
        self.page_properties.clear();
    }

    /// Hydrates this document from the entry with its identifier in a workflow details payload
    ///
    /// # Errors
    ///
    /// * `Deserialization` when the payload is not a workflow details document
    /// * `InvalidInput` when no entry carries this document's identifier
    pub fn set_document_details(&mut self, workflow_details: &Value) -> ShResult<()> {
        let details = WorkflowDetails::deserialize(workflow_details)
            .map_err(|e| AppError::Deserialization(format!("workflow details: {e}")))?;
        let entry = details
            .documents
            .iter()
            .find(|document| document.document_id == self.id)
            .ok_or_else(|| {
                AppError::InvalidInput(format!(
                    "document {} not found in package {}",
                    self.id, details.package_id
                ))
            })?;
        self.package_id = details.package_id;
        self.apply(entry);
        Ok(())
    }

    /// Refreshes this document from the workflow details of its package
    pub async fn refresh(&mut self, connection: &Connection) -> ShResult<ApiResponse> {
        let response = connection.get_workflow_details(self.package_id).await?;
        response.error_for_status()?;
        let json: Value = response.json()?;
        self.set_document_details(&json)?;
        Ok(response)
    }

    /// Requests the fields of one page
    ///
    /// # Errors
    ///
    /// `InvalidInput` when `page_number` is 0 or beyond the page count, before any call
    pub async fn get_document_fields(
        &self,
        connection: &Connection,
        page_number: u32,
    ) -> ShResult<ApiResponse> {
        if page_number == 0 || page_number > self.page_count {
            return Err(AppError::InvalidInput(format!(
                "page number {page_number} outside 1..={} of document {}",
                self.page_count, self.id
            )));
        }
        connection
            .get_document_fields(self.package_id, self.id, page_number)
            .await
    }

    /// Fetches the fields of every page, one request per page
    ///
    /// Nothing is applied unless every page was fetched and parsed; the per-page map and the
    /// [`Page`] objects are then replaced together.
    pub async fn fetch_page_fields(&mut self, connection: &Connection) -> ShResult<()> {
        let mut fetched = BTreeMap::new();
        for page_number in 1..=self.page_count {
            let response = self.get_document_fields(connection, page_number).await?;
            response.error_for_status()?;
            fetched.insert(page_number, parse_fields(&response)?);
        }
        debug!(
            "Fields of {} pages loaded for document {}",
            fetched.len(),
            self.id
        );

        for page in &mut self.pages {
            page.fields = fetched.get(&page.number).cloned().unwrap_or_default();
        }
        self.page_properties = fetched;
        Ok(())
    }

    /// Identifier of the owning package
    #[must_use]
    pub fn package_id(&self) -> i64 {
        self.package_id
    }

    /// Identifier
    #[must_use]
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Name
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// File type
    #[must_use]
    pub fn document_type(&self) -> Option<&str> {
        self.document_type.as_deref()
    }

    /// Position in the package
    #[must_use]
    pub fn order(&self) -> Option<i64> {
        self.order
    }

    /// Source application
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Page height
    #[must_use]
    pub fn height(&self) -> Option<f64> {
        self.height
    }

    /// Page width
    #[must_use]
    pub fn width(&self) -> Option<f64> {
        self.width
    }

    /// Number of pages
    #[must_use]
    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    /// Creation timestamp
    #[must_use]
    pub fn created_on(&self) -> Option<&str> {
        self.created_on.as_deref()
    }

    /// Last modification timestamp
    #[must_use]
    pub fn modified_on(&self) -> Option<&str> {
        self.modified_on.as_deref()
    }

    /// Form field summary
    #[must_use]
    pub fn form_fields(&self) -> &Value {
        &self.form_fields
    }

    /// Template information
    #[must_use]
    pub fn template(&self) -> &Value {
        &self.template
    }

    /// Certify policy
    #[must_use]
    pub fn certify(&self) -> &CertifyPolicy {
        &self.certify
    }

    /// Lock form fields flag
    #[must_use]
    pub fn lock_form_fields(&self) -> Option<bool> {
        self.lock_form_fields
    }

    /// Locked flag
    #[must_use]
    pub fn locked(&self) -> Option<bool> {
        self.locked
    }

    /// Pages, one per page of the document
    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Mutable pages, to fetch their fields individually
    pub fn pages_mut(&mut self) -> &mut [Page] {
        &mut self.pages
    }

    /// Fields per page number, filled by [`Document::fetch_page_fields`]
    #[must_use]
    pub fn page_properties(&self) -> &BTreeMap<u32, FieldMap> {
        &self.page_properties
    }
}

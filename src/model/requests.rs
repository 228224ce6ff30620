/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! Request models for the SigningHub endpoints
//!
//! Every optional parameter of an endpoint lives in an options struct. Fields left as `None`
//! are omitted from the outgoing JSON body (or header), so the service keeps its own default or
//! the previously stored value.

use crate::error::{AppError, ShResult};
use crate::model::api_version::ApiVersion;
use crate::presentation::recipient::WorkflowRole;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Options shared by listing endpoints that accept search headers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingOptions {
    /// Sent as `x-search-text`
    pub search_text: Option<String>,
    /// Sent as `x-enterprise`
    pub enterprise: Option<bool>,
}

impl ListingOptions {
    /// Filter the listing by free text
    pub fn with_search_text(mut self, search_text: impl Into<String>) -> Self {
        self.search_text = Some(search_text.into());
        self
    }

    /// Restrict the listing to enterprise records
    pub fn with_enterprise(mut self, enterprise: bool) -> Self {
        self.enterprise = Some(enterprise);
        self
    }
}

/// Credentials needed to open a protected document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentAccessOptions {
    /// Sent as `x-password`
    pub password: Option<String>,
    /// Sent as `x-otp`
    pub otp: Option<String>,
}

impl DocumentAccessOptions {
    /// Document opening password
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// One time password
    pub fn with_otp(mut self, otp: impl Into<String>) -> Self {
        self.otp = Some(otp.into());
        self
    }
}

/// Options of a document upload
#[derive(Debug, Clone, PartialEq)]
pub struct UploadOptions {
    /// Sent as `x-source`, identifies the uploading application
    pub source: String,
    /// Sent as `x-convert-document`
    pub convert_document: Option<bool>,
}

impl Default for UploadOptions {
    fn default() -> Self {
        Self {
            source: crate::constants::DEFAULT_DOCUMENT_SOURCE.to_string(),
            convert_document: None,
        }
    }
}

impl UploadOptions {
    /// Set the source application
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Ask the service to convert the document to PDF
    pub fn with_convert_document(mut self, convert: bool) -> Self {
        self.convert_document = Some(convert);
        self
    }
}

/// Optional attributes of an enterprise user registration
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct RegisterEnterpriseUserOptions {
    /// Initial password of the user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_password: Option<String>,
    /// Job title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    /// Company name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// Mobile number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
    /// Security question
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_question: Option<String>,
    /// Answer to the security question
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_answer: Option<String>,
    /// Enterprise role name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_role: Option<String>,
    /// Whether the user receives email notifications
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_notification: Option<bool>,
    /// Country code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Time zone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    /// Language code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Registration authority user id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_ra_id: Option<String>,
    /// National id of the user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_national_id: Option<String>,
}

impl RegisterEnterpriseUserOptions {
    /// Set the enterprise role
    pub fn with_enterprise_role(mut self, role: impl Into<String>) -> Self {
        self.enterprise_role = Some(role.into());
        self
    }

    /// Set the initial password
    pub fn with_user_password(mut self, password: impl Into<String>) -> Self {
        self.user_password = Some(password.into());
        self
    }

    /// Enable or disable email notifications
    pub fn with_email_notification(mut self, enabled: bool) -> Self {
        self.email_notification = Some(enabled);
        self
    }
}

/// Attributes that can be changed on an existing enterprise user
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct UpdateEnterpriseUserOptions {
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// Job title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    /// Company name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// Mobile number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
    /// Current password, required by the service when changing it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_old_password: Option<String>,
    /// New password
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_new_password: Option<String>,
    /// National id of the user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_national_id: Option<String>,
    /// Security question
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_question: Option<String>,
    /// Answer to the security question
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_answer: Option<String>,
    /// Enterprise role name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_role: Option<String>,
    /// Whether the user receives email notifications
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_notification: Option<bool>,
    /// Whether the account is enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Country code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Time zone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    /// Language code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Signing certificate assigned to an enterprise user
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct CertificateRequest {
    /// Owner of the certificate
    pub user_email: String,
    /// Signing capacity name
    pub capacity_name: String,
    /// Alias of the certificate on the signing server
    pub certificate_alias: String,
    /// Level of assurance, e.g. "ADVANCED_ELECTRONIC_SIGNATURE"
    pub level_of_assurance: String,
    /// Key protection option, e.g. "SERVER_SIDE"
    pub key_protection_option: String,
    /// Whether this becomes the default certificate of the user
    #[serde(rename = "isDefault")]
    pub is_default: bool,
}

/// Member of a contact group
#[derive(Debug, Clone, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct GroupMemberRequest {
    /// Email of the member
    #[serde(rename = "UserEmail")]
    pub user_email: String,
    /// Display name of the member
    #[serde(rename = "UserName", skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

impl GroupMemberRequest {
    /// Creates a member with an email and an optional name
    pub fn new(user_email: impl Into<String>, user_name: Option<String>) -> Self {
        Self {
            user_email: user_email.into(),
            user_name,
        }
    }
}

/// Enterprise or personal contact group
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct GroupRequest {
    /// Name of the group
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description of the group
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Members of the group
    #[serde(rename = "Members", skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<GroupMemberRequest>>,
}

impl GroupRequest {
    /// New group with a name and members
    pub fn new(name: impl Into<String>, members: Vec<GroupMemberRequest>) -> Self {
        Self {
            name: Some(name.into()),
            description: None,
            members: Some(members),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Certify policy change of a document
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct CertifyPolicyUpdate {
    /// Certify settings
    pub certify: CertifyUpdate,
    /// Lock form fields after the last signature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock_form_fields: Option<bool>,
}

/// Certify block of [`CertifyPolicyUpdate`]
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct CertifyUpdate {
    /// Whether certification is enabled
    pub enabled: bool,
    /// Permission granted after certification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,
}

impl CertifyPolicyUpdate {
    /// Enables or disables certification
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            certify: CertifyUpdate {
                enabled,
                permission: None,
            },
            lock_form_fields: None,
        }
    }

    /// Set the permission
    pub fn with_permission(mut self, permission: impl Into<String>) -> Self {
        self.certify.permission = Some(permission.into());
        self
    }

    /// Lock form fields
    pub fn with_lock_form_fields(mut self, lock: bool) -> Self {
        self.lock_form_fields = Some(lock);
        self
    }
}

/// Workflow settings of a package
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct UpdateWorkflowDetailsOptions {
    /// "SERIAL", "PARALLEL" or "CUSTOM"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_type: Option<String>,
    /// "ONLY_ME", "ME_AND_OTHERS" or "ONLY_OTHERS"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_mode: Option<String>,
    /// Keep the workflow going when a recipient declines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continue_on_decline: Option<bool>,
    /// Message shown to the recipients
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl UpdateWorkflowDetailsOptions {
    /// Set the workflow type
    pub fn with_workflow_type(mut self, workflow_type: impl Into<String>) -> Self {
        self.workflow_type = Some(workflow_type.into());
        self
    }

    /// Set the message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set the decline behaviour
    pub fn with_continue_on_decline(mut self, continue_on_decline: bool) -> Self {
        self.continue_on_decline = Some(continue_on_decline);
        self
    }
}

/// A user added to a workflow
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct WorkflowUserRequest {
    /// Email of the recipient
    pub user_email: String,
    /// Display name of the recipient
    pub user_name: String,
    /// Role in the workflow
    pub role: WorkflowRole,
    /// Whether the recipient is notified by email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_notification: Option<bool>,
    /// Position of the recipient, mandatory for "CUSTOM" workflows
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_order: Option<u32>,
}

impl WorkflowUserRequest {
    /// New recipient with its role
    pub fn new(user_email: impl Into<String>, user_name: impl Into<String>, role: WorkflowRole) -> Self {
        Self {
            user_email: user_email.into(),
            user_name: user_name.into(),
            role,
            email_notification: None,
            signing_order: None,
        }
    }

    /// Enable or disable email notification
    pub fn with_email_notification(mut self, enabled: bool) -> Self {
        self.email_notification = Some(enabled);
        self
    }

    /// Set the signing order
    pub fn with_signing_order(mut self, order: u32) -> Self {
        self.signing_order = Some(order);
        self
    }
}

/// Changes applied to a workflow recipient; `None` keeps the stored value
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct UpdateWorkflowRecipientOptions {
    /// New email of a user recipient
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    /// New display name of a user recipient
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// New role
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<WorkflowRole>,
    /// Email notification switch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_notification: Option<bool>,
    /// New signing order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_order: Option<u32>,
}

/// A predefined group added to a workflow
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct WorkflowGroupRequest {
    /// Name of the contact group
    pub group_name: String,
    /// Role of the group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<WorkflowRole>,
    /// Whether the members are notified by email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_notification: Option<bool>,
    /// Position of the group in the workflow
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_order: Option<u32>,
}

impl WorkflowGroupRequest {
    /// New group recipient
    pub fn new(group_name: impl Into<String>) -> Self {
        Self {
            group_name: group_name.into(),
            role: None,
            email_notification: None,
            signing_order: None,
        }
    }

    /// Set the role
    pub fn with_role(mut self, role: WorkflowRole) -> Self {
        self.role = Some(role);
        self
    }
}

/// A placeholder recipient, resolved to a real user later
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct PlaceholderRequest {
    /// Name of the placeholder
    pub placeholder: String,
    /// Role of the placeholder
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<WorkflowRole>,
    /// Email notification switch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_notification: Option<bool>,
    /// Position in the workflow
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_order: Option<u32>,
}

impl PlaceholderRequest {
    /// New placeholder
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            role: None,
            email_notification: None,
            signing_order: None,
        }
    }
}

/// Permissions of a workflow recipient
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct WorkflowPermissionsUpdate {
    /// Apply the permissions to every recipient of the package
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_to_all: Option<bool>,
    /// Permission flags
    pub permissions: WorkflowPermissions,
}

/// Permission flags of [`WorkflowPermissionsUpdate`]
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct WorkflowPermissions {
    /// May print the document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print: Option<bool>,
    /// May download the document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download: Option<bool>,
    /// May add text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_text: Option<bool>,
    /// May add attachments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_attachment: Option<bool>,
    /// May change recipients
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_recipients: Option<bool>,
    /// Legal notice shown before signing
    pub legal_notice: LegalNotice,
}

/// Legal notice settings
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct LegalNotice {
    /// Whether the notice is shown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Name of the configured legal notice
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_notice_name: Option<String>,
}

/// Document opening authentication of a workflow recipient
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct WorkflowAuthenticationUpdate {
    /// Apply the settings to every recipient of the package
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_to_all: Option<bool>,
    /// Authentication factors
    pub authentication: OpeningAuthentication,
    /// Time window in which the document can be opened
    pub access_duration: AccessDuration,
}

/// Authentication block of [`WorkflowAuthenticationUpdate`]
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct OpeningAuthentication {
    /// Whether opening authentication is required
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Password factor
    pub password: PasswordFactor,
    /// SMS one time password factor
    pub sms_otp: SmsOtpFactor,
}

/// Password factor
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct PasswordFactor {
    /// Whether the factor is active
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Password the recipient must type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_password: Option<String>,
}

/// SMS OTP factor
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct SmsOtpFactor {
    /// Whether the factor is active
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Number receiving the OTP
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
}

/// Access duration block of [`WorkflowAuthenticationUpdate`]
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct AccessDuration {
    /// Whether access is limited in time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Limit expressed as a date range
    pub duration_by_date: DurationByDate,
    /// Limit expressed as a number of days
    pub duration_by_days: DurationByDays,
}

/// Date range limit
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct DurationByDate {
    /// Whether this limit applies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Range bounds
    pub duration: DateRange,
}

/// Bounds of [`DurationByDate`]
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct DateRange {
    /// Start of the window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date_time: Option<String>,
    /// End of the window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date_time: Option<String>,
}

/// Day count limit
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct DurationByDays {
    /// Whether this limit applies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Number of days
    pub duration: DayCount,
}

/// Body of [`DurationByDays`]
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct DayCount {
    /// Number of days the document stays accessible
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_days: Option<u32>,
}

/// Reminder settings of a workflow recipient
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct WorkflowRemindersUpdate {
    /// Apply the settings to every recipient of the package
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_to_all: Option<bool>,
    /// Whether reminders are sent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Days before the first reminder
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remind_after: Option<u32>,
    /// Repetition of the reminder
    pub repeat: ReminderRepeat,
}

/// Repetition block of [`WorkflowRemindersUpdate`]
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct ReminderRepeat {
    /// Whether the reminder repeats
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Days between reminders
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_reminding_after: Option<u32>,
    /// Maximum number of reminders
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_reminders: Option<u32>,
}

/// Position and size of a field on a page
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct Dimensions {
    /// Horizontal offset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// Vertical offset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// Width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl Dimensions {
    /// Fully specified rectangle
    #[must_use]
    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            width: Some(width),
            height: Some(height),
        }
    }
}

/// Signature, initials or in-person field placed for a recipient
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct FieldPlacement {
    /// Workflow order of the recipient owning the field
    pub order: u32,
    /// 1-based page number
    pub page_no: u32,
    /// Name of the field; generated by the service when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
    /// Display mode, e.g. "VISIBLE"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    /// Level of assurance of a signature field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_of_assurance: Option<Vec<String>>,
    /// Position and size
    pub dimensions: Dimensions,
}

impl FieldPlacement {
    /// Field for the recipient at `order` on page `page_no`
    #[must_use]
    pub fn new(order: u32, page_no: u32) -> Self {
        Self {
            order,
            page_no,
            field_name: None,
            display: None,
            level_of_assurance: None,
            dimensions: Dimensions::default(),
        }
    }

    /// Set the field name
    pub fn with_field_name(mut self, name: impl Into<String>) -> Self {
        self.field_name = Some(name.into());
        self
    }

    /// Set the position and size
    pub fn with_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = dimensions;
        self
    }
}

/// Font of a text field
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct Font {
    /// Font name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Font size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    /// Embedded font size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedded_size: Option<f64>,
}

/// Text box field
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct TextboxField {
    /// Workflow order of the recipient filling the field
    pub order: u32,
    /// 1-based page number
    pub page_no: u32,
    /// Name of the field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
    /// Text type, e.g. "TEXT" or "DATE"
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub text_type: Option<String>,
    /// Format of a date field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Placeholder text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Prefilled value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Maximum number of characters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    /// Multi-line text box
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiline: Option<bool>,
    /// "TEXT_FIELD" or "NAME", "EMAIL", ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,
    /// Validation rule applied by the service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_rule: Option<String>,
    /// Font settings
    pub font: Font,
    /// Position and size
    pub dimensions: Dimensions,
}

impl TextboxField {
    /// Text box for the recipient at `order` on page `page_no`
    #[must_use]
    pub fn new(order: u32, page_no: u32) -> Self {
        Self {
            order,
            page_no,
            field_name: None,
            text_type: None,
            format: None,
            placeholder: None,
            value: None,
            max_length: None,
            multiline: None,
            field_type: None,
            validation_rule: None,
            font: Font::default(),
            dimensions: Dimensions::default(),
        }
    }

    /// Set the field name
    pub fn with_field_name(mut self, name: impl Into<String>) -> Self {
        self.field_name = Some(name.into());
        self
    }

    /// Set the prefilled value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the position and size
    pub fn with_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = dimensions;
        self
    }
}

/// One value entered into a form field
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct FormFieldValue {
    /// Name of the field
    pub field_name: String,
    /// Entered value
    pub value: serde_json::Value,
    /// Group of a radio button
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radio_group_name: Option<String>,
}

/// Values entered into the form fields of a document, grouped per field kind
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct FillFormFieldsRequest {
    /// Save without submitting
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_save: Option<bool>,
    /// Text fields
    pub text: Vec<FormFieldValue>,
    /// Radio buttons
    pub radio: Vec<FormFieldValue>,
    /// Check boxes
    pub checkbox: Vec<FormFieldValue>,
    /// Drop downs
    pub dropdown: Vec<FormFieldValue>,
    /// List boxes
    pub listbox: Vec<FormFieldValue>,
}

impl FillFormFieldsRequest {
    fn entry(field_name: impl Into<String>, value: serde_json::Value) -> FormFieldValue {
        FormFieldValue {
            field_name: field_name.into(),
            value,
            radio_group_name: None,
        }
    }

    /// Fill a text field
    pub fn text(mut self, field_name: impl Into<String>, value: impl Into<String>) -> Self {
        self.text
            .push(Self::entry(field_name, serde_json::Value::String(value.into())));
        self
    }

    /// Select a radio button; the group name is mandatory for radios
    pub fn radio(
        mut self,
        field_name: impl Into<String>,
        value: bool,
        radio_group_name: impl Into<String>,
    ) -> Self {
        let mut entry = Self::entry(field_name, serde_json::Value::Bool(value));
        entry.radio_group_name = Some(radio_group_name.into());
        self.radio.push(entry);
        self
    }

    /// Tick or untick a check box
    pub fn checkbox(mut self, field_name: impl Into<String>, value: bool) -> Self {
        self.checkbox
            .push(Self::entry(field_name, serde_json::Value::Bool(value)));
        self
    }

    /// Choose a drop down entry
    pub fn dropdown(mut self, field_name: impl Into<String>, value: impl Into<String>) -> Self {
        self.dropdown
            .push(Self::entry(field_name, serde_json::Value::String(value.into())));
        self
    }

    /// Choose a list box entry
    pub fn listbox(mut self, field_name: impl Into<String>, value: impl Into<String>) -> Self {
        self.listbox
            .push(Self::entry(field_name, serde_json::Value::String(value.into())));
        self
    }

    /// Save without submitting
    pub fn with_auto_save(mut self, auto_save: bool) -> Self {
        self.auto_save = Some(auto_save);
        self
    }
}

/// Signature applied to a signature field
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct SignDocumentRequest {
    /// Name of the signature field
    pub field_name: String,
    /// Base64 image of the hand signature
    pub hand_signature_image: String,
    /// Signing server, mandatory on API v4
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_server: Option<String>,
    /// Signing capacity, mandatory on API v4
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_capacity: Option<String>,
    /// Reason given by the signer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_reason: Option<String>,
    /// Location given by the signer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_location: Option<String>,
    /// Contact information of the signer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_information: Option<String>,
    /// Name of the signer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// Password of the signer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_password: Option<String>,
    /// Signature appearance; the user's default when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appearance_design: Option<String>,
    /// Skip the verification block in the response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_verification: Option<bool>,
    /// Second factor, sent as `x-otp` instead of in the body
    #[serde(skip)]
    pub otp: Option<String>,
}

impl SignDocumentRequest {
    /// Signature of `field_name` with a base64 hand signature image
    pub fn new(field_name: impl Into<String>, hand_signature_image: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            hand_signature_image: hand_signature_image.into(),
            signing_server: None,
            signing_capacity: None,
            signing_reason: None,
            signing_location: None,
            contact_information: None,
            user_name: None,
            user_password: None,
            appearance_design: None,
            skip_verification: None,
            otp: None,
        }
    }

    /// Set signing server and capacity
    pub fn with_signing_server(
        mut self,
        signing_server: impl Into<String>,
        signing_capacity: impl Into<String>,
    ) -> Self {
        self.signing_server = Some(signing_server.into());
        self.signing_capacity = Some(signing_capacity.into());
        self
    }

    /// Set the signing reason
    pub fn with_signing_reason(mut self, reason: impl Into<String>) -> Self {
        self.signing_reason = Some(reason.into());
        self
    }

    /// Set the second factor
    pub fn with_otp(mut self, otp: impl Into<String>) -> Self {
        self.otp = Some(otp.into());
        self
    }
}

/// Optional reason attached to a decline or approval
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct ReasonRequest {
    /// Free text reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ReasonRequest {
    /// Reason with the given text
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: Some(reason.into()),
        }
    }
}

/// Optional attributes of a free trial registration
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct RegisterFreeTrialOptions {
    /// Job title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    /// Company name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// Mobile number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
    /// Country code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Time zone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    /// Language code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Enterprise invitation accepted at registration
    pub invitation: Invitation,
}

/// Invitation block of [`RegisterFreeTrialOptions`]
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct Invitation {
    /// Name of the inviting enterprise
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_name: Option<String>,
}

/// General profile attributes of the authenticated user
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct UpdateGeneralProfileOptions {
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// Job title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    /// Company name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// Mobile number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
    /// National id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_national_id: Option<String>,
}

/// Signature delegation of the authenticated user
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct DelegationSettingsUpdate {
    /// Whether delegation is active
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Delegate details
    pub delegate: Delegate,
}

/// Delegate block of [`DelegationSettingsUpdate`]
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct Delegate {
    /// Email of the delegate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    /// Name of the delegate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// Start of the delegation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// End of the delegation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

/// Changes to an existing signing certificate
///
/// The key protection option is fixed when the certificate is created.
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct CertificateUpdate {
    /// Owner of the certificate
    pub user_email: String,
    /// Signing capacity name
    pub capacity_name: String,
    /// Alias of the certificate on the signing server
    pub certificate_alias: String,
    /// Level of assurance
    pub level_of_assurance: String,
    /// Whether this becomes the default certificate of the user
    #[serde(rename = "isDefault")]
    pub is_default: bool,
}

/// Changes applied to a group recipient; `None` keeps the stored value
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct UpdateWorkflowGroupOptions {
    /// Replacement contact group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    /// New role
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<WorkflowRole>,
    /// Email notification switch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_notification: Option<bool>,
    /// New signing order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_order: Option<u32>,
}

/// Changes applied to a placeholder recipient; `None` keeps the stored value
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct UpdatePlaceholderOptions {
    /// New placeholder name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// New role
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<WorkflowRole>,
    /// Email notification switch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_notification: Option<bool>,
    /// New signing order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_order: Option<u32>,
}

/// Signing time authentication of an electronic or in-person signature field
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct FieldAuthentication {
    /// Whether the signer must authenticate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// SMS one time password factor
    pub sms_otp: SmsOtpFactor,
}

impl FieldAuthentication {
    /// Authentication by an OTP sent to `mobile_number`
    pub fn sms_otp(mobile_number: impl Into<String>) -> Self {
        Self {
            enabled: Some(true),
            sms_otp: SmsOtpFactor {
                enabled: Some(true),
                mobile_number: Some(mobile_number.into()),
            },
        }
    }
}

/// Electronic signature field placed for a recipient
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct ElectronicSignatureField {
    /// Workflow order of the recipient owning the field
    pub order: u32,
    /// 1-based page number
    pub page_no: u32,
    /// Name of the field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
    /// Display mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    /// Position and size
    pub dimensions: Dimensions,
    /// Signing time authentication
    pub authentication: FieldAuthentication,
}

impl ElectronicSignatureField {
    /// Field for the recipient at `order` on page `page_no`, without authentication
    #[must_use]
    pub fn new(order: u32, page_no: u32) -> Self {
        Self {
            order,
            page_no,
            field_name: None,
            display: None,
            dimensions: Dimensions::default(),
            authentication: FieldAuthentication {
                enabled: Some(false),
                sms_otp: SmsOtpFactor::default(),
            },
        }
    }

    /// Set the field name
    pub fn with_field_name(mut self, name: impl Into<String>) -> Self {
        self.field_name = Some(name.into());
        self
    }

    /// Set the position and size
    pub fn with_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = dimensions;
        self
    }

    /// Set the signing time authentication
    pub fn with_authentication(mut self, authentication: FieldAuthentication) -> Self {
        self.authentication = authentication;
        self
    }
}

/// Radio button or check box placed for a recipient
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct ChoiceField {
    /// Workflow order of the recipient filling the field
    pub order: u32,
    /// 1-based page number
    pub page_no: u32,
    /// Name of the field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
    /// Initial checked state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<bool>,
    /// Validation rule, e.g. "MANDATORY"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_rule: Option<String>,
    /// Group of mutually exclusive radio buttons; radio buttons only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radio_group_name: Option<String>,
    /// Position; the size is fixed by the service
    pub dimensions: Dimensions,
}

impl ChoiceField {
    /// Field for the recipient at `order` on page `page_no`
    #[must_use]
    pub fn new(order: u32, page_no: u32) -> Self {
        Self {
            order,
            page_no,
            field_name: None,
            value: None,
            validation_rule: None,
            radio_group_name: None,
            dimensions: Dimensions::default(),
        }
    }

    /// Set the field name
    pub fn with_field_name(mut self, name: impl Into<String>) -> Self {
        self.field_name = Some(name.into());
        self
    }

    /// Set the radio group
    pub fn with_radio_group(mut self, group: impl Into<String>) -> Self {
        self.radio_group_name = Some(group.into());
        self
    }

    /// Set the position
    #[must_use]
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.dimensions.x = Some(x);
        self.dimensions.y = Some(y);
        self
    }
}

/// Changes to a signature, initials or in-person field, addressed by its current name
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct FieldUpdate {
    /// Current name of the field
    pub field_name: String,
    /// New name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renamed_as: Option<String>,
    /// Page the field moves to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_no: Option<u32>,
    /// Display mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    /// Placeholder text of an in-person field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// New position and size
    pub dimensions: Dimensions,
    /// Signing time authentication of electronic and in-person fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication: Option<FieldAuthentication>,
}

impl FieldUpdate {
    /// Update of the field named `field_name`
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            renamed_as: None,
            page_no: None,
            display: None,
            placeholder: None,
            dimensions: Dimensions::default(),
            authentication: None,
        }
    }

    /// Rename the field
    pub fn renamed_as(mut self, name: impl Into<String>) -> Self {
        self.renamed_as = Some(name.into());
        self
    }

    /// Move the field
    pub fn with_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = dimensions;
        self
    }
}

/// Changes to a text box, addressed by its current name
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct TextboxFieldUpdate {
    /// Current name of the field
    pub field_name: String,
    /// New name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renamed_as: Option<String>,
    /// Page the field moves to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_no: Option<u32>,
    /// Text type
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub text_type: Option<String>,
    /// Format of a date field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Placeholder text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Maximum number of characters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    /// Multi-line text box
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiline: Option<bool>,
    /// "TEXT_FIELD" or "NAME", "EMAIL", ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,
    /// Validation rule
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_rule: Option<String>,
    /// Font settings
    pub font: Font,
    /// New position and size
    pub dimensions: Dimensions,
}

impl TextboxFieldUpdate {
    /// Update of the text box named `field_name`
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            renamed_as: None,
            page_no: None,
            text_type: None,
            format: None,
            placeholder: None,
            value: None,
            max_length: None,
            multiline: None,
            field_type: None,
            validation_rule: None,
            font: Font::default(),
            dimensions: Dimensions::default(),
        }
    }

    /// Set the value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// Changes to a radio button or check box, addressed by its current name
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct ChoiceFieldUpdate {
    /// Current name of the field
    pub field_name: String,
    /// New name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renamed_as: Option<String>,
    /// Page the field moves to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_no: Option<u32>,
    /// Checked state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<bool>,
    /// Validation rule
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_rule: Option<String>,
    /// Radio group; radio buttons only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radio_group_name: Option<String>,
    /// New position
    pub dimensions: Dimensions,
}

impl ChoiceFieldUpdate {
    /// Update of the field named `field_name`
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            renamed_as: None,
            page_no: None,
            value: None,
            validation_rule: None,
            radio_group_name: None,
            dimensions: Dimensions::default(),
        }
    }

    /// Set the checked state
    #[must_use]
    pub fn with_value(mut self, value: bool) -> Self {
        self.value = Some(value);
        self
    }
}

/// Kind of field created by [`AutoplaceRequest`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutoplaceFieldType {
    /// Signature field, API v4
    #[serde(rename = "SIGNATURE")]
    Signature,
    /// Electronic signature
    #[serde(rename = "ELECTRONIC_SIGNATURE")]
    ElectronicSignature,
    /// Digital signature
    #[serde(rename = "DIGITAL_SIGNATURE")]
    DigitalSignature,
    /// In-person signature
    #[serde(rename = "IN_PERSON_SIGNATURE")]
    InPersonSignature,
    /// Initials
    #[serde(rename = "INITIALS")]
    Initials,
    /// Free text
    #[serde(rename = "TEXT")]
    Text,
    /// Name of the signer
    #[serde(rename = "NAME")]
    Name,
    /// Email of the signer
    #[serde(rename = "EMAIL")]
    Email,
    /// Company of the signer
    #[serde(rename = "COMPANY")]
    Company,
    /// Job title of the signer
    #[serde(rename = "JOBTITLE")]
    JobTitle,
    /// Radio button
    #[serde(rename = "RadioBox")]
    RadioBox,
    /// Check box
    #[serde(rename = "CheckBox")]
    CheckBox,
    /// Date
    #[serde(rename = "DATE")]
    Date,
}

impl AutoplaceFieldType {
    /// Wire name of the field type
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Signature => "SIGNATURE",
            Self::ElectronicSignature => "ELECTRONIC_SIGNATURE",
            Self::DigitalSignature => "DIGITAL_SIGNATURE",
            Self::InPersonSignature => "IN_PERSON_SIGNATURE",
            Self::Initials => "INITIALS",
            Self::Text => "TEXT",
            Self::Name => "NAME",
            Self::Email => "EMAIL",
            Self::Company => "COMPANY",
            Self::JobTitle => "JOBTITLE",
            Self::RadioBox => "RadioBox",
            Self::CheckBox => "CheckBox",
            Self::Date => "DATE",
        }
    }

    fn is_signature(&self) -> bool {
        matches!(
            self,
            Self::Signature | Self::DigitalSignature | Self::ElectronicSignature
        )
    }

    fn is_choice(&self) -> bool {
        matches!(self, Self::RadioBox | Self::CheckBox)
    }
}

/// Side of the matched text where autoplaced fields go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AutoplacePlacement {
    /// Left of the text, the service default
    #[default]
    Left,
    /// Right of the text
    Right,
    /// Above the text
    Top,
    /// Below the text
    Bottom,
}

/// Fields created next to every occurrence of a text in a document
///
/// Most optional attributes only apply to some field types; [`AutoplaceRequest::validate`]
/// rejects the combinations the service does not accept.
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct AutoplaceRequest {
    /// Text searched in the document
    pub search_text: String,
    /// Workflow order of the recipient owning the fields
    pub order: u32,
    /// Kind of field to create
    pub field_type: AutoplaceFieldType,
    /// Side of the text, left when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<AutoplacePlacement>,
    /// Level of assurance; signature fields on API v4 only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_of_assurance: Option<Vec<String>>,
    /// Multi-line text box; text only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiline: Option<bool>,
    /// Prefilled value; text, radio and check box only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Maximum number of characters; not for signatures and choices
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    /// Validation rule; radio and check box only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_rule: Option<String>,
    /// Radio group; radio buttons only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radio_group_name: Option<String>,
    /// Placeholder text; in-person signatures only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Date format; date fields only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Font settings; text only
    pub font: Font,
    /// Size of the created fields
    pub dimensions: Dimensions,
}

impl AutoplaceRequest {
    /// Fields of `field_type` for the recipient at `order`, placed next to `search_text`
    pub fn new(search_text: impl Into<String>, order: u32, field_type: AutoplaceFieldType) -> Self {
        Self {
            search_text: search_text.into(),
            order,
            field_type,
            placement: None,
            level_of_assurance: None,
            multiline: None,
            value: None,
            max_length: None,
            validation_rule: None,
            radio_group_name: None,
            placeholder: None,
            format: None,
            font: Font::default(),
            dimensions: Dimensions::default(),
        }
    }

    /// Set the side of the text
    #[must_use]
    pub fn with_placement(mut self, placement: AutoplacePlacement) -> Self {
        self.placement = Some(placement);
        self
    }

    /// Set the size of the fields
    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.dimensions.width = Some(width);
        self.dimensions.height = Some(height);
        self
    }

    /// Checks every optional attribute against the field type and the API version
    ///
    /// # Errors
    ///
    /// `InvalidInput` naming the first attribute the field type does not accept
    pub fn validate(&self, api_version: ApiVersion) -> ShResult<()> {
        let kind = self.field_type;
        let reject = |attribute: &str| -> ShResult<()> {
            Err(AppError::InvalidInput(format!(
                "{attribute} cannot be set for field type {}",
                kind.as_str()
            )))
        };

        if self.level_of_assurance.is_some() {
            if kind != AutoplaceFieldType::Signature {
                return reject("level_of_assurance");
            }
            if api_version < ApiVersion::V4 {
                return Err(AppError::InvalidInput(
                    "level_of_assurance requires API version 4".to_string(),
                ));
            }
        }
        if self.multiline.is_some() && kind != AutoplaceFieldType::Text {
            return reject("multiline");
        }
        if self.value.is_some() && !(kind == AutoplaceFieldType::Text || kind.is_choice()) {
            return reject("value");
        }
        if self.max_length.is_some() && (kind.is_signature() || kind.is_choice()) {
            return reject("max_length");
        }
        if self.validation_rule.is_some() && !kind.is_choice() {
            return reject("validation_rule");
        }
        if self.radio_group_name.is_some() && kind != AutoplaceFieldType::RadioBox {
            return reject("radio_group_name");
        }
        if self.placeholder.is_some() && kind != AutoplaceFieldType::InPersonSignature {
            return reject("placeholder");
        }
        if self.format.is_some() && kind != AutoplaceFieldType::Date {
            return reject("format");
        }
        if self.font != Font::default() && kind != AutoplaceFieldType::Text {
            return reject("font");
        }
        Ok(())
    }
}

/// Device a hand signature appearance applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureDevice {
    /// Desktop browsers
    Web,
    /// Mobile apps
    Mobile,
}

impl SignatureDevice {
    /// Segment of the hand signature preview paths
    #[must_use]
    pub fn preview_segment(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Mobile => "mobile",
        }
    }

    /// Segment of the appearance update paths
    #[must_use]
    pub fn appearance_segment(&self) -> &'static str {
        match self {
            Self::Web => "browser",
            Self::Mobile => "mobile",
        }
    }
}

/// Hand signature or initials appearance of the authenticated user
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct AppearanceUpdate {
    /// "DRAW", "TEXT" or "UPLOAD"
    pub default_method: String,
    /// Base64 image used by the upload method
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_image: Option<String>,
    /// Text used by the text method
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_value: Option<String>,
}

impl AppearanceUpdate {
    /// Appearance with the given default method
    pub fn new(default_method: impl Into<String>) -> Self {
        Self {
            default_method: default_method.into(),
            upload_image: None,
            text_value: None,
        }
    }

    /// Set the uploaded image, base64 encoded
    pub fn with_upload_image(mut self, image: impl Into<String>) -> Self {
        self.upload_image = Some(image.into());
        self
    }

    /// Set the text value
    pub fn with_text_value(mut self, text: impl Into<String>) -> Self {
        self.text_value = Some(text.into());
        self
    }
}

/// Metadata embedded in the signatures of the authenticated user
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct SignatureMetadataUpdate {
    /// Reason shown in the signature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_reason: Option<String>,
    /// Location shown in the signature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_location: Option<String>,
    /// Contact information shown in the signature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_information: Option<String>,
}

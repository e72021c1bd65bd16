//! Claim offer content as delivered by push-notification ingestion.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
pub struct Attribute {
    #[builder(setter(into))]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option, into))]
    pub data: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option, into))]
    pub attribute_type: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalData {
    #[builder(setter(into))]
    pub name: String,
    #[builder(setter(into))]
    pub version: String,
    #[serde(default)]
    #[builder(default)]
    pub revealed_attributes: Vec<Attribute>,
    pub claim_definition_schema_sequence_number: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issuer {
    pub name: String,
    pub did: String,
}

impl Issuer {
    pub fn new<N, D>(name: N, did: D) -> Self
    where
        N: Into<String>,
        D: Into<String>,
    {
        Self {
            name: name.into(),
            did: did.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalDataPayload {
    pub data: AdditionalData,
    pub issuer: Issuer,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_msg: Option<String>,
}

/// Delivery metadata of the notification that carried the offer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPayloadInfo {
    pub uid: String,
    pub sender_logo_url: String,
    #[serde(rename = "remotePairwiseDID")]
    pub remote_pairwise_did: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_additional_data_payload_from_notification_json() {
        let json = r#"{
            "data": {
                "name": "Home Address",
                "version": "1.0.0",
                "revealedAttributes": [
                    { "label": "Address 1", "data": "Address Address Address" },
                    { "label": "Photo", "type": "image" }
                ],
                "claimDefinitionSchemaSequenceNumber": 36
            },
            "issuer": { "name": "Test Issuer", "did": "V4SGRU86Z58d6TV7PBUe6f" },
            "statusMsg": "pending"
        }"#;
        let payload: AdditionalDataPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.data.claim_definition_schema_sequence_number, 36);
        assert_eq!(payload.data.revealed_attributes.len(), 2);
        assert_eq!(
            payload.data.revealed_attributes[1],
            Attribute::builder().label("Photo").attribute_type("image").build()
        );
        assert_eq!(payload.issuer, Issuer::new("Test Issuer", "V4SGRU86Z58d6TV7PBUe6f"));
        assert_eq!(payload.status_msg.as_deref(), Some("pending"));
    }

    #[test]
    fn test_payload_info_uses_notification_field_names() {
        let info = NotificationPayloadInfo {
            uid: "usd123".to_string(),
            sender_logo_url: "https://logo.example.org/issuer.png".to_string(),
            remote_pairwise_did: "8XFh8yBzrpJQmNyZzgoTqB".to_string(),
        };
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["remotePairwiseDID"], "8XFh8yBzrpJQmNyZzgoTqB");
        assert_eq!(value["senderLogoUrl"], "https://logo.example.org/issuer.png");
    }
}

//! File attachments
//!
//! Each attachment holds the raw bytes (base64 in JSON) and their MIME type.

use super::enums::FileType;
use crate::core::EntityRef;
use crate::impl_resource_entity;
use chrono::{DateTime, Utc};

// Document attached to a karbar's record
impl_resource_entity!(
    FileName,
    "fileName",
    "file_name",
    {
        #[serde(with = "crate::core::binary::base64_opt")]
        madrak: Vec<u8>,
        madrak_content_type: String,
        karbar: EntityRef,
    }
);

impl_resource_entity!(
    FileHesabResi,
    "fileHesabResi",
    "file_hesab_resi",
    {
        #[serde(with = "crate::core::binary::base64_opt")]
        file: Vec<u8>,
        file_content_type: String,
        shomare: i32,
        tarikh_name: DateTime<Utc>,
        mozoo: String,
        file_type: FileType,
        hesab_resi: EntityRef,
    }
);

impl_resource_entity!(
    FileGozaresh,
    "fileGozaresh",
    "file_gozaresh",
    {
        #[serde(with = "crate::core::binary::base64_opt")]
        file: Vec<u8>,
        file_content_type: String,
        gozaresh: EntityRef,
    }
);

impl_resource_entity!(
    FileBargeMamooriat,
    "fileBargeMamooriat",
    "file_barge_mamooriat",
    {
        #[serde(with = "crate::core::binary::base64_opt")]
        madarek: Vec<u8>,
        madarek_content_type: String,
        barge_mamooriat: EntityRef,
    }
);

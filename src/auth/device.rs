//
//  instaapi
//  auth/device.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Device Descriptor
//!
//! The platform ties sessions to the device they were created on. Every
//! request carries the device's identifiers in its headers and user agent,
//! so the same [`AndroidDevice`] must be used for the lifetime of a session.
//!
//! ## Identifiers
//!
//! | Field | Header | Format |
//! |-------|--------|--------|
//! | `device_guid` | `X-IG-Device-ID`, `_uuid` form field | UUID v4 |
//! | `device_id` | `X-IG-Android-ID` | `android-` + 16 hex chars |
//! | `phone_guid` | - | UUID v4 |

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::api::signing::ApiVersion;

/// Android OS version reported by a device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AndroidVersion {
    /// API level, e.g. `28`.
    pub api_level: u32,
    /// Release string, e.g. `"9"`.
    pub release: String,
}

/// A stable description of the device a session lives on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AndroidDevice {
    pub device_guid: Uuid,
    pub phone_guid: Uuid,
    pub device_id: String,
    pub android_version: AndroidVersion,
    pub dpi: String,
    pub resolution: String,
    pub manufacturer: String,
    pub model: String,
    pub device: String,
    pub chipset: String,
}

struct HardwareProfile {
    api_level: u32,
    release: &'static str,
    dpi: &'static str,
    resolution: &'static str,
    manufacturer: &'static str,
    model: &'static str,
    device: &'static str,
    chipset: &'static str,
}

const HARDWARE_PROFILES: &[HardwareProfile] = &[
    HardwareProfile {
        api_level: 28,
        release: "9",
        dpi: "480dpi",
        resolution: "1080x2076",
        manufacturer: "samsung",
        model: "SM-G960F",
        device: "starlte",
        chipset: "samsungexynos9810",
    },
    HardwareProfile {
        api_level: 29,
        release: "10",
        dpi: "420dpi",
        resolution: "1080x2130",
        manufacturer: "Google",
        model: "Pixel 4",
        device: "flame",
        chipset: "flame",
    },
    HardwareProfile {
        api_level: 26,
        release: "8.0.0",
        dpi: "480dpi",
        resolution: "1080x1920",
        manufacturer: "HUAWEI",
        model: "FIG-LX1",
        device: "HWFIG-H",
        chipset: "hi6250",
    },
    HardwareProfile {
        api_level: 28,
        release: "9",
        dpi: "440dpi",
        resolution: "1080x2260",
        manufacturer: "Xiaomi",
        model: "Mi 9T",
        device: "davinci",
        chipset: "qcom",
    },
];

impl AndroidDevice {
    /// Generates a device with a random hardware profile and random
    /// identifiers.
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let seed: [u8; 16] = rng.random();
        let seed: String = seed.iter().map(|b| format!("{b:02x}")).collect();
        let profile = HARDWARE_PROFILES
            .choose(&mut rng)
            .unwrap_or(&HARDWARE_PROFILES[0]);
        Self::with_profile(profile, &seed, Uuid::new_v4(), Uuid::new_v4())
    }

    /// Builds a device whose `device_id` is derived from `seed`.
    ///
    /// The same seed always yields the same `device_id`; the GUIDs are still
    /// random.
    pub fn from_seed(seed: &str) -> Self {
        Self::with_profile(&HARDWARE_PROFILES[0], seed, Uuid::new_v4(), Uuid::new_v4())
    }

    fn with_profile(
        profile: &HardwareProfile,
        seed: &str,
        device_guid: Uuid,
        phone_guid: Uuid,
    ) -> Self {
        Self {
            device_guid,
            phone_guid,
            device_id: device_id_from_seed(seed),
            android_version: AndroidVersion {
                api_level: profile.api_level,
                release: profile.release.to_string(),
            },
            dpi: profile.dpi.to_string(),
            resolution: profile.resolution.to_string(),
            manufacturer: profile.manufacturer.to_string(),
            model: profile.model.to_string(),
            device: profile.device.to_string(),
            chipset: profile.chipset.to_string(),
        }
    }

    /// Renders the app user agent for this device.
    ///
    /// # Example
    ///
    /// ```text
    /// Instagram 123.0.0.21.115 Android (28/9; 480dpi; 1080x2076; samsung; SM-G960F; starlte; samsungexynos9810; en_US; 188791681)
    /// ```
    pub fn user_agent(&self, version: &ApiVersion, locale: &str) -> String {
        format!(
            "Instagram {} Android ({}/{}; {}; {}; {}; {}; {}; {}; {}; {})",
            version.app_version,
            self.android_version.api_level,
            self.android_version.release,
            self.dpi,
            self.resolution,
            self.manufacturer,
            self.model,
            self.device,
            self.chipset,
            locale.replace('-', "_"),
            version.app_version_code,
        )
    }
}

/// `android-` followed by the first 16 hex chars of SHA-256(seed).
fn device_id_from_seed(seed: &str) -> String {
    let digest = format!("{:x}", Sha256::digest(seed.as_bytes()));
    format!("android-{}", &digest[..16])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_id_is_stable_for_seed() {
        let a = AndroidDevice::from_seed("my.business");
        let b = AndroidDevice::from_seed("my.business");
        assert_eq!(a.device_id, b.device_id);
        assert_ne!(a.device_guid, b.device_guid);
        assert!(a.device_id.starts_with("android-"));
        assert_eq!(a.device_id.len(), "android-".len() + 16);
    }

    #[test]
    fn test_generate_uses_known_profile() {
        let device = AndroidDevice::generate();
        assert!(HARDWARE_PROFILES.iter().any(|p| p.model == device.model));
        assert!(device.device_id.chars().skip(8).all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_user_agent() {
        let device = AndroidDevice::from_seed("seed");
        let ua = device.user_agent(&ApiVersion::default(), "en-US");
        assert_eq!(
            ua,
            "Instagram 123.0.0.21.115 Android (28/9; 480dpi; 1080x2076; samsung; SM-G960F; starlte; samsungexynos9810; en_US; 188791681)"
        );
    }

    #[test]
    fn test_round_trips_through_json() {
        let device = AndroidDevice::generate();
        let json = serde_json::to_string(&device).unwrap();
        let back: AndroidDevice = serde_json::from_str(&json).unwrap();
        assert_eq!(device, back);
    }
}

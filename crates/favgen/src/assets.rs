//! The fixed set of icon assets produced for every site

/// A single PNG asset with its exact output dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconAsset {
    pub file_name: &'static str,
    pub width: u32,
    pub height: u32,
}

impl IconAsset {
    const fn new(file_name: &'static str, width: u32, height: u32) -> Self {
        Self {
            file_name,
            width,
            height,
        }
    }

    /// Size label as used in web manifests, e.g. `192x192`
    pub fn size_label(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }

    /// Site-root relative URL of the asset, e.g. `/favicon.png`
    pub fn url(&self) -> String {
        format!("/{}", self.file_name)
    }
}

pub const ANDROID_CHROME_192: IconAsset = IconAsset::new("android-chrome-192x192.png", 192, 192);
pub const ANDROID_CHROME_512: IconAsset = IconAsset::new("android-chrome-512x512.png", 512, 512);
pub const APPLE_TOUCH_ICON: IconAsset = IconAsset::new("apple-touch-icon.png", 180, 180);
pub const FAVICON_16: IconAsset = IconAsset::new("favicon-16x16.png", 16, 16);
pub const FAVICON_32: IconAsset = IconAsset::new("favicon-32x32.png", 32, 32);
pub const FAVICON_48: IconAsset = IconAsset::new("favicon.png", 48, 48);
pub const MSTILE_70: IconAsset = IconAsset::new("mstile-70x70.png", 70, 70);
pub const MSTILE_150: IconAsset = IconAsset::new("mstile-150x150.png", 150, 150);
pub const MSTILE_310_WIDE: IconAsset = IconAsset::new("mstile-310x150.png", 310, 150);
pub const MSTILE_310: IconAsset = IconAsset::new("mstile-310x310.png", 310, 310);

/// Every asset in generation order
pub const ICON_ASSETS: [IconAsset; 10] = [
    ANDROID_CHROME_192,
    ANDROID_CHROME_512,
    APPLE_TOUCH_ICON,
    FAVICON_16,
    FAVICON_32,
    FAVICON_48,
    MSTILE_70,
    MSTILE_150,
    MSTILE_310_WIDE,
    MSTILE_310,
];

/// Assets listed in `site.webmanifest`
pub const MANIFEST_ICONS: [IconAsset; 2] = [ANDROID_CHROME_192, ANDROID_CHROME_512];

pub const MANIFEST_FILE_NAME: &str = "site.webmanifest";
pub const BROWSERCONFIG_FILE_NAME: &str = "browserconfig.xml";

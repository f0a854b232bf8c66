//! Scene and scene-image types for the script workflow.

use serde::{Deserialize, Serialize};

/// One unit of a generated script.
///
/// A scene is produced in two stages: text-only first (`image_url` is
/// `None`), then enriched with a data URI once image generation completes.
/// Ordering is significant; scenes render in generation order.
///
/// # Examples
///
/// ```
/// use reelsmith_core::Scene;
///
/// let scene = Scene::new("A storm over the outback", "It began with a storm.");
/// assert!(scene.image_url.is_none());
///
/// let scene = scene.with_image_url("data:image/png;base64,aGk=");
/// assert!(scene.has_image());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    /// Concise description of the visual footage, suitable as an image prompt
    pub visual: String,
    /// The spoken lines for the scene
    pub voiceover: String,
    /// Data URI of the generated image, once available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Scene {
    /// Create a text-only scene with no image attached.
    pub fn new(visual: impl Into<String>, voiceover: impl Into<String>) -> Self {
        Self {
            visual: visual.into(),
            voiceover: voiceover.into(),
            image_url: None,
        }
    }

    /// Attach an image URL, consuming the scene.
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Whether an image has been attached to this scene.
    pub fn has_image(&self) -> bool {
        self.image_url.is_some()
    }
}

/// A generated image as returned by the image provider.
///
/// Holds the base64 payload as received on the wire; decoding is deferred
/// until a consumer actually needs raw bytes.
///
/// # Examples
///
/// ```
/// use reelsmith_core::SceneImage;
///
/// let image = SceneImage::png("aGVsbG8=");
/// assert_eq!(image.to_data_uri(), "data:image/png;base64,aGVsbG8=");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneImage {
    /// MIME type of the image
    pub mime: String,
    /// Base64-encoded image bytes
    pub data: String,
}

impl SceneImage {
    /// Create a scene image from a MIME type and base64 payload.
    pub fn new(mime: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime: mime.into(),
            data: data.into(),
        }
    }

    /// Create a PNG scene image from a base64 payload.
    pub fn png(data: impl Into<String>) -> Self {
        Self::new("image/png", data)
    }

    /// Render the image as a `data:` URI suitable for embedding.
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.data)
    }
}

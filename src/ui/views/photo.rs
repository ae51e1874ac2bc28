use crate::application::capture::{CaptureSession, CaptureState};
use crate::domain::{ImageRef, Post};
use crate::ui::app::{Action, CaptureAction, ResponseAction};

use super::post::{PostRenderer, PostView};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoSlot {
    /// Camera button. `busy` while a permission check or capture is in flight.
    Empty { busy: bool, on_capture: Action },
    Image { image: ImageRef, on_clear: Action },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoView {
    pub post_id: String,
    pub title: String,
    pub slot: PhotoSlot,
}

/// Photo slot with camera and clear buttons. The post's `image` is the source of truth.
pub struct PhotoRenderer;

impl PostRenderer for PhotoRenderer {
    fn render(&self, post: &Post, capture: Option<&CaptureSession>) -> PostView {
        let slot = match &post.image {
            Some(image) => PhotoSlot::Image {
                image: image.clone(),
                on_clear: Action::Response(ResponseAction::ClearImage {
                    post_id: post.id.clone(),
                }),
            },
            None => PhotoSlot::Empty {
                busy: capture.is_some_and(|session| {
                    matches!(
                        session.state(),
                        CaptureState::PermissionCheck | CaptureState::Capturing { .. }
                    )
                }),
                on_capture: Action::Capture(CaptureAction::Request {
                    post_id: post.id.clone(),
                }),
            },
        };

        PostView::Photo(PhotoView {
            post_id: post.id.clone(),
            title: post.title.clone(),
            slot,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PostType;

    #[test]
    fn test_empty_and_captured_slots() {
        let mut post = Post::new(PostType::Photo, "p1", "Photo");
        let PostView::Photo(view) = PhotoRenderer.render(&post, None) else {
            panic!("expected photo view");
        };
        assert!(matches!(view.slot, PhotoSlot::Empty { busy: false, .. }));

        post.image = Some(ImageRef::new("/pics/JPEG_1.jpg"));
        let PostView::Photo(view) = PhotoRenderer.render(&post, None) else {
            panic!("expected photo view");
        };
        assert_eq!(
            view.slot,
            PhotoSlot::Image {
                image: ImageRef::new("/pics/JPEG_1.jpg"),
                on_clear: Action::Response(ResponseAction::ClearImage {
                    post_id: "p1".into()
                }),
            }
        );
    }
}

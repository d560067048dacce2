//! The `setPixel` GraphQL mutation.

/// GraphQL operation name of the mutation.
pub const SET_PIXEL_OPERATION: &str = "setPixel";

/// Action name Reddit expects for pixel placement.
pub const SET_PIXEL_ACTION: &str = "r/replace:set_pixel";

/// Canvas the pixel is placed on.
pub const CANVAS_INDEX: i64 = 0;

/// The GraphQL document sent with every pixel placement.
pub const SET_PIXEL_QUERY: &str = "mutation setPixel($input: ActInput!) {\n  act(input: $input) {\n    data {\n      ... on BasicMessage {\n        id\n        data {\n          ... on GetUserCooldownResponseMessageData {\n            nextAvailablePixelTimestamp\n            __typename\n          }\n          ... on SetPixelResponseMessageData {\n            timestamp\n            __typename\n          }\n          __typename\n        }\n        __typename\n      }\n      __typename\n    }\n    __typename\n  }\n}\n";

/// Request body of the `setPixel` mutation.
///
/// # Example
///
/// ```rust
/// use reddit_place::clients::place::SetPixelMutation;
///
/// let body = SetPixelMutation::new(5, 10, 3).to_json();
/// assert_eq!(body["variables"]["input"]["PixelMessageData"]["colorIndex"], 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SetPixelMutation {
    /// Horizontal coordinate.
    pub x: i64,
    /// Vertical coordinate.
    pub y: i64,
    /// Palette index of the color.
    pub color_index: i64,
}

impl SetPixelMutation {
    /// Builds the mutation for one pixel. Values are passed through unchecked.
    #[must_use]
    pub const fn new(x: i64, y: i64, color_index: i64) -> Self {
        Self { x, y, color_index }
    }

    /// Returns the full GraphQL request body.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "operationName": SET_PIXEL_OPERATION,
            "variables": {
                "input": {
                    "actionName": SET_PIXEL_ACTION,
                    "PixelMessageData": {
                        "coordinate": {"x": self.x, "y": self.y},
                        "colorIndex": self.color_index,
                        "canvasIndex": CANVAS_INDEX,
                    },
                },
            },
            "query": SET_PIXEL_QUERY,
        })
    }
}

impl From<SetPixelMutation> for serde_json::Value {
    fn from(mutation: SetPixelMutation) -> Self {
        mutation.to_json()
    }
}

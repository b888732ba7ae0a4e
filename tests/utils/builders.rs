use tierboard::AddPlayerRequest;

// ============================================================================
// Player Request Builder
// ============================================================================

/// Fluent builder for add requests with sensible defaults
pub struct PlayerBuilder {
    request: AddPlayerRequest,
}

impl PlayerBuilder {
    pub fn new(identity: &str, display_name: &str) -> Self {
        Self {
            request: AddPlayerRequest::new(identity, display_name, "NA"),
        }
    }

    pub fn region(mut self, region: &str) -> Self {
        self.request.region = region.to_string();
        self
    }

    pub fn points(mut self, points: u64) -> Self {
        self.request = self.request.with_points(points);
        self
    }

    pub fn badge(mut self, category: &str, tier: &str) -> Self {
        self.request = self.request.with_badge(category, tier);
        self
    }

    pub fn submitted_under(mut self, category: &str) -> Self {
        self.request = self.request.submitted_under(category);
        self
    }

    pub fn build(self) -> AddPlayerRequest {
        self.request
    }
}

use uuid::Uuid;

pub const DEFAULT_SCENE_NAME: &str = "Scene";

/// One request's unit of work. Lives only as long as the request.
#[derive(Debug, Clone)]
pub struct RenderJob {
    pub id: Uuid,
    pub source_code: String,
    pub scene_name: String,
}

impl RenderJob {
    pub fn new(source_code: String, scene_name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            source_code,
            scene_name,
        }
    }

    pub fn filename(&self) -> String {
        format!("{}.mp4", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_job_gets_a_fresh_v4_id() {
        let a = RenderJob::new("code".into(), DEFAULT_SCENE_NAME.into());
        let b = RenderJob::new("code".into(), DEFAULT_SCENE_NAME.into());

        assert_ne!(a.id, b.id);
        assert_eq!(a.id.get_version_num(), 4);
    }

    #[test]
    fn filename_is_id_with_mp4_extension() {
        let job = RenderJob::new("code".into(), "Intro".into());

        assert_eq!(job.filename(), format!("{}.mp4", job.id));
    }
}

// Scene manager: ordered level registry with load-by-index and load-by-name

use log::info;

use super::layout::LevelLayout;
use super::LevelError;

/// Ordered registry of levels plus the index of the active one
#[derive(Debug, Clone)]
pub struct SceneManager {
    levels: &'static [LevelLayout],
    active: usize,
}

impl SceneManager {
    /// Create a manager with the first level active
    pub fn new(levels: &'static [LevelLayout]) -> Result<Self, LevelError> {
        if levels.is_empty() {
            return Err(LevelError::NoLevels);
        }
        Ok(Self { levels, active: 0 })
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_layout(&self) -> &'static LevelLayout {
        &self.levels[self.active]
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Activate the level at `index`
    pub fn load_index(&mut self, index: usize) -> Result<&'static LevelLayout, LevelError> {
        let levels = self.levels;
        let layout = levels
            .get(index)
            .ok_or(LevelError::IndexOutOfRange {
                index,
                count: levels.len(),
            })?;

        self.active = index;
        info!("Loaded level {} ({})", index, layout.name);
        Ok(layout)
    }

    /// Activate the level called `name`
    pub fn load_by_name(&mut self, name: &str) -> Result<&'static LevelLayout, LevelError> {
        let index = self
            .levels
            .iter()
            .position(|level| level.name == name)
            .ok_or_else(|| LevelError::UnknownLevel(name.to_string()))?;

        self.load_index(index)
    }

    /// Names of all levels, in order
    pub fn level_names(&self) -> impl Iterator<Item = &'static str> {
        self.levels.iter().map(|level| level.name)
    }
}

#[cfg(test)]
mod tests {
    use super::super::levels::LEVELS;
    use super::*;

    #[test]
    fn test_starts_at_first_level() {
        let scenes = SceneManager::new(&LEVELS).unwrap();
        assert_eq!(scenes.active_index(), 0);
        assert_eq!(scenes.active_layout().name, LEVELS[0].name);
    }

    #[test]
    fn test_empty_registry_is_rejected() {
        assert_eq!(SceneManager::new(&[]).unwrap_err(), LevelError::NoLevels);
    }

    #[test]
    fn test_load_index() {
        let mut scenes = SceneManager::new(&LEVELS).unwrap();
        let layout = scenes.load_index(2).unwrap();

        assert_eq!(layout.name, LEVELS[2].name);
        assert_eq!(scenes.active_index(), 2);
    }

    #[test]
    fn test_load_index_out_of_range_keeps_active() {
        let mut scenes = SceneManager::new(&LEVELS).unwrap();
        scenes.load_index(1).unwrap();

        let err = scenes.load_index(LEVELS.len()).unwrap_err();
        assert_eq!(
            err,
            LevelError::IndexOutOfRange {
                index: LEVELS.len(),
                count: LEVELS.len()
            }
        );
        assert_eq!(scenes.active_index(), 1);
    }

    #[test]
    fn test_load_by_name() {
        let mut scenes = SceneManager::new(&LEVELS).unwrap();
        scenes.load_by_name("Final Ascent").unwrap();
        assert_eq!(scenes.active_index(), 2);

        let err = scenes.load_by_name("Nowhere").unwrap_err();
        assert_eq!(err.to_string(), "Unknown level: Nowhere");
        assert_eq!(scenes.active_index(), 2);
    }

    #[test]
    fn test_level_names() {
        let scenes = SceneManager::new(&LEVELS).unwrap();
        let names: Vec<_> = scenes.level_names().collect();
        assert_eq!(names, vec!["The Entrance", "Twin Towers", "Final Ascent"]);
    }
}

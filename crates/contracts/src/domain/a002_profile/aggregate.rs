use serde::{Deserialize, Serialize};

/// Профиль, отображаемый в шапке страницы
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub description: String,
}

impl Profile {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Значения для предзаполнения формы редактирования
    pub fn to_dto(&self) -> ProfileDto {
        ProfileDto {
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }

    /// Обновить данные из DTO
    pub fn update(&mut self, dto: &ProfileDto) {
        self.name = dto.name.clone();
        self.description = dto.description.clone();
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::new("Жак-Ив Кусто", "Исследователь океана")
    }
}

/// DTO формы `edit-profile`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDto {
    pub name: String,
    pub description: String,
}

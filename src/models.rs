use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// 菜品所属的课程（上菜顺序）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Course {
    #[default]
    Starters,
    Mains,
    Dessert,
}

impl Course {
    pub const ALL: [Course; 3] = [Course::Starters, Course::Mains, Course::Dessert];

    pub fn name(&self) -> &'static str {
        match self {
            Course::Starters => "Starters",
            Course::Mains => "Mains",
            Course::Dessert => "Dessert",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).unwrap_or(0)
    }

    /// 选择器中的下一个课程（循环）
    pub fn next(&self) -> Course {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// 选择器中的上一个课程（循环）
    pub fn prev(&self) -> Course {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 菜单条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub id: String,
    pub dish_name: String,
    pub description: String,
    pub course: Course,
    pub price: String, // 单位 ZAR，不做数值校验
}

impl MenuEntry {
    /// 单行摘要，例如 "Pasta - Mains - R120"
    pub fn summary(&self, currency: &str) -> String {
        format!(
            "{} - {} - {}{}",
            self.dish_name, self.course, currency, self.price
        )
    }
}

/// 表单提交前的条目数据（尚无 id）
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MenuDraft {
    pub dish_name: String,
    pub description: String,
    pub course: Course,
    pub price: String,
}

/// 必填字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    DishName,
    Description,
    Price,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill all fields.")]
    MissingFields(Vec<RequiredField>),
}

/// 检查必填字段是否为空
pub fn validate_draft(draft: &MenuDraft) -> Result<(), FormError> {
    let missing: Vec<RequiredField> = [
        (RequiredField::DishName, &draft.dish_name),
        (RequiredField::Description, &draft.description),
        (RequiredField::Price, &draft.price),
    ]
    .into_iter()
    .filter(|(_, value)| value.is_empty())
    .map(|(field, _)| field)
    .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(FormError::MissingFields(missing))
    }
}

/// 生成在集合内不重复的 id
pub fn unique_id(existing: &[MenuEntry]) -> String {
    loop {
        let id = Uuid::new_v4().to_string();
        if !existing.iter().any(|entry| entry.id == id) {
            return id;
        }
    }
}

/// 将草稿追加到集合末尾，返回新集合（原集合不变）
pub fn append_entry(items: &[MenuEntry], draft: MenuDraft) -> Vec<MenuEntry> {
    let entry = MenuEntry {
        id: unique_id(items),
        dish_name: draft.dish_name,
        description: draft.description,
        course: draft.course,
        price: draft.price,
    };

    let mut result = Vec::with_capacity(items.len() + 1);
    result.extend_from_slice(items);
    result.push(entry);
    result
}

/// 页面之间传递的参数（按值复制）
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavParams {
    pub menu_items: Vec<MenuEntry>,
}

impl NavParams {
    pub fn new(menu_items: Vec<MenuEntry>) -> Self {
        Self { menu_items }
    }
}

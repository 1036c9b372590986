//! 下拉框等表单控件使用的静态选项

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 选项（值 + 显示名称）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/choices.ts")]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl Choice {
    fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

// 性别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/choices.ts")]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    pub const MALE: &'static str = "M";
    pub const FEMALE: &'static str = "F";

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    pub fn choices() -> Vec<Choice> {
        [Gender::Male, Gender::Female]
            .iter()
            .map(|g| Choice::new(&g.to_string(), g.label()))
            .collect()
    }
}

impl<'de> Deserialize<'de> for Gender {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Gender>().map_err(|_| {
            serde::de::Error::custom(format!("无效的性别: '{s}'. 支持的取值: M, F"))
        })
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "{}", Gender::MALE),
            Gender::Female => write!(f, "{}", Gender::FEMALE),
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Gender::MALE => Ok(Gender::Male),
            Gender::FEMALE => Ok(Gender::Female),
            _ => Err(format!("Invalid gender: {s}")),
        }
    }
}

// 年级（1-9 年级，以标签文本 "1".."9" 存储）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/choices.ts")]
pub enum GradeLevel {
    #[serde(rename = "1")]
    First,
    #[serde(rename = "2")]
    Second,
    #[serde(rename = "3")]
    Third,
    #[serde(rename = "4")]
    Fourth,
    #[serde(rename = "5")]
    Fifth,
    #[serde(rename = "6")]
    Sixth,
    #[serde(rename = "7")]
    Seventh,
    #[serde(rename = "8")]
    Eighth,
    #[serde(rename = "9")]
    Ninth,
}

impl GradeLevel {
    pub const ALL: [GradeLevel; 9] = [
        GradeLevel::First,
        GradeLevel::Second,
        GradeLevel::Third,
        GradeLevel::Fourth,
        GradeLevel::Fifth,
        GradeLevel::Sixth,
        GradeLevel::Seventh,
        GradeLevel::Eighth,
        GradeLevel::Ninth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GradeLevel::First => "1",
            GradeLevel::Second => "2",
            GradeLevel::Third => "3",
            GradeLevel::Fourth => "4",
            GradeLevel::Fifth => "5",
            GradeLevel::Sixth => "6",
            GradeLevel::Seventh => "7",
            GradeLevel::Eighth => "8",
            GradeLevel::Ninth => "9",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GradeLevel::First => "First Grade",
            GradeLevel::Second => "Second Grade",
            GradeLevel::Third => "Third Grade",
            GradeLevel::Fourth => "Fourth Grade",
            GradeLevel::Fifth => "Fifth Grade",
            GradeLevel::Sixth => "Sixth Grade",
            GradeLevel::Seventh => "Seventh Grade",
            GradeLevel::Eighth => "Eighth Grade",
            GradeLevel::Ninth => "Ninth Grade",
        }
    }

    pub fn choices() -> Vec<Choice> {
        Self::ALL
            .iter()
            .map(|g| Choice::new(g.as_str(), g.label()))
            .collect()
    }
}

impl<'de> Deserialize<'de> for GradeLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<GradeLevel>().map_err(|_| {
            serde::de::Error::custom(format!("无效的年级: '{s}'. 支持的取值: 1-9"))
        })
    }
}

impl std::fmt::Display for GradeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for GradeLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|g| g.as_str() == s)
            .copied()
            .ok_or_else(|| format!("Invalid grade level: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_level_choices_cover_one_to_nine() {
        let choices = GradeLevel::choices();
        assert_eq!(choices.len(), 9);
        assert_eq!(choices[0].value, "1");
        assert_eq!(choices[8].value, "9");
        assert_eq!(choices[4].label, "Fifth Grade");
    }

    #[test]
    fn test_grade_level_round_trip_label() {
        assert_eq!("5".parse::<GradeLevel>(), Ok(GradeLevel::Fifth));
        assert_eq!(GradeLevel::Ninth.to_string(), "9");
        assert!("10".parse::<GradeLevel>().is_err());
        assert!("0".parse::<GradeLevel>().is_err());
    }

    #[test]
    fn test_gender_serialization() {
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), r#""F""#);
        assert_eq!(
            serde_json::from_str::<Gender>(r#""M""#).unwrap(),
            Gender::Male
        );
        assert!(serde_json::from_str::<Gender>(r#""X""#).is_err());
        assert_eq!(Gender::choices().len(), 2);
    }
}

use change_info::{Record, Schema};

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub name: String,
    pub age: i32,
    pub class: String,
    pub sex: i32,
    pub weight: i32,
}

impl Record for Student {}

impl Student {
    pub fn sex_label(&self) -> &'static str {
        match self.sex {
            1 => "男",
            2 => "女",
            _ => "",
        }
    }
}

#[allow(dead_code)]
pub fn student(name: &str, age: i32, class: &str, sex: i32, weight: i32) -> Student {
    Student { name: name.into(), age, class: class.into(), sex, weight }
}

pub fn schema() -> Schema<Student> {
    Schema::builder()
        .field("Name", |s: &Student| s.name.clone())
        .need()
        .trans("姓名")
        .field("Age", |s: &Student| s.age)
        .need()
        .field("Class", |s: &Student| s.class.clone())
        .special()
        .trans("班级")
        .field("Sex", |s: &Student| s.sex)
        .need()
        .trans("性别")
        .change(Student::sex_label)
        .field("Weight", |s: &Student| s.weight)
        .trans("体重")
        .build()
}

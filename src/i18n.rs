//! Translations
//!
//! Key-based text lookup injected through context. Unknown keys resolve to
//! the key itself.

use leptos::prelude::*;

/// Resolves a translation key to display text
pub trait Translator {
    fn resolve(&self, key: &str) -> String;
}

pub const LANGUAGES: &[(&str, &str)] = &[("en", "English"), ("zh", "中文")];

const EN: &[(&str, &str)] = &[
    ("app.title", "Apply Track"),
    ("nav.opportunities", "Opportunities"),
    ("nav.applications", "Applications"),
    ("title.sign_out", "Sign out"),
    ("onboarding.title", "Let's set up your profile"),
    ("onboarding.step", "Step"),
    ("onboarding.next", "Next"),
    ("onboarding.back", "Back"),
    ("onboarding.finish", "Finish"),
    ("onboarding.locating", "Looking up your location..."),
    ("q.profile_type", "Which best describes you?"),
    ("q.name", "What's your name?"),
    ("q.target_role", "What role are you aiming for?"),
    ("q.skills", "List your key skills (comma separated)"),
    ("q.location", "Where are you based? (optional)"),
    ("q.remote", "Are you open to remote work?"),
    ("q.graduation_year", "When do you graduate?"),
    ("q.internship", "Are you interested in internships?"),
    ("q.years", "How many years of professional experience do you have?"),
    ("q.previous_field", "Which field are you coming from?"),
    ("type.student", "Student"),
    ("type.professional", "Professional"),
    ("type.careerchanger", "Career changer"),
    ("answer.yes", "Yes"),
    ("answer.no", "No"),
    ("err.required", "This answer is required"),
    ("err.number", "Please enter a whole number"),
    ("err.choice", "Please pick one of the options"),
    ("opps.title", "Opportunities"),
    ("opps.filter.all", "All"),
    ("opps.track", "Track"),
    ("opps.open", "Open"),
    ("opps.remote", "Remote"),
    ("opps.km_away", "km away"),
    ("opps.fit", "Fit"),
    ("band.strong", "Strong fit"),
    ("band.good", "Good fit"),
    ("band.stretch", "Stretch"),
    ("apps.title", "Your applications"),
    ("apps.empty", "No applications yet. Track an opportunity to get started."),
    ("detail.back", "Back"),
    ("detail.applied_on", "Applied on"),
    ("detail.advance", "Advance stage"),
    ("stage.submitted", "Submitted"),
    ("stage.review", "Review"),
    ("stage.interview", "Interview"),
    ("stage.decision", "Decision"),
    ("rounds.title", "Interview rounds"),
    ("rounds.add", "Add round"),
    ("rounds.round", "Round"),
    ("rounds.completed", "completed"),
    ("status.completed", "Completed"),
    ("status.current", "Current"),
    ("status.upcoming", "Upcoming"),
    ("round.interviewer", "Interviewer"),
    ("round.date", "Date"),
    ("round.notes", "Notes"),
    ("round.preview", "Preview"),
    ("round.save", "Save"),
    ("round.saved", "Saved"),
    ("round.complete", "Mark complete"),
    ("round.move_up", "Move up"),
    ("round.move_down", "Move down"),
    ("round.remove_confirm", "Remove?"),
    ("prep.title", "Preparation"),
    ("prep.talking_points", "Talking points"),
    ("prep.gaps", "Gaps to study"),
    ("prep.insight.intern", "Interns are hired on potential: show curiosity and how you learn."),
    ("prep.insight.junior", "Junior roles value fundamentals and a clear story about recent projects."),
    ("prep.insight.mid", "Mid-level interviews probe ownership: bring examples you drove end to end."),
    ("prep.insight.senior", "Senior loops focus on judgement, trade-offs and mentoring others."),
    ("prep.item.research", "Research the company and product"),
    ("prep.item.stories", "Prepare three STAR stories"),
    ("prep.item.skills", "Review the required skills"),
    ("prep.item.questions", "Write questions for the interviewer"),
    ("prep.item.salary", "Check the salary range"),
];

const ZH: &[(&str, &str)] = &[
    ("app.title", "求职追踪"),
    ("nav.opportunities", "职位机会"),
    ("nav.applications", "我的申请"),
    ("title.sign_out", "退出"),
    ("onboarding.title", "完善你的个人资料"),
    ("onboarding.step", "步骤"),
    ("onboarding.next", "下一步"),
    ("onboarding.back", "上一步"),
    ("onboarding.finish", "完成"),
    ("onboarding.locating", "正在查询位置..."),
    ("q.profile_type", "哪一项最符合你的情况?"),
    ("q.name", "你的名字是?"),
    ("q.target_role", "你的目标职位是?"),
    ("q.skills", "列出你的主要技能(逗号分隔)"),
    ("q.location", "你在哪个城市?(可选)"),
    ("q.remote", "是否接受远程工作?"),
    ("q.graduation_year", "你哪一年毕业?"),
    ("q.internship", "是否考虑实习?"),
    ("q.years", "你有几年工作经验?"),
    ("q.previous_field", "你之前从事哪个领域?"),
    ("type.student", "学生"),
    ("type.professional", "在职"),
    ("type.careerchanger", "转行"),
    ("answer.yes", "是"),
    ("answer.no", "否"),
    ("err.required", "此项必填"),
    ("err.number", "请输入整数"),
    ("err.choice", "请选择一个选项"),
    ("opps.title", "职位机会"),
    ("opps.filter.all", "全部"),
    ("opps.track", "追踪"),
    ("opps.open", "打开"),
    ("opps.remote", "远程"),
    ("opps.km_away", "公里"),
    ("opps.fit", "匹配度"),
    ("band.strong", "高度匹配"),
    ("band.good", "较为匹配"),
    ("band.stretch", "有挑战"),
    ("apps.title", "我的申请"),
    ("apps.empty", "还没有申请,先追踪一个职位吧。"),
    ("detail.back", "返回"),
    ("detail.applied_on", "申请日期"),
    ("detail.advance", "推进阶段"),
    ("stage.submitted", "已投递"),
    ("stage.review", "筛选中"),
    ("stage.interview", "面试"),
    ("stage.decision", "结果"),
    ("rounds.title", "面试轮次"),
    ("rounds.add", "添加轮次"),
    ("rounds.round", "轮次"),
    ("rounds.completed", "已完成"),
    ("status.completed", "已完成"),
    ("status.current", "进行中"),
    ("status.upcoming", "未开始"),
    ("round.interviewer", "面试官"),
    ("round.date", "日期"),
    ("round.notes", "笔记"),
    ("round.preview", "预览"),
    ("round.save", "保存"),
    ("round.saved", "已保存"),
    ("round.complete", "标记完成"),
    ("round.move_up", "上移"),
    ("round.move_down", "下移"),
    ("round.remove_confirm", "删除?"),
    ("prep.title", "面试准备"),
    ("prep.talking_points", "可以强调"),
    ("prep.gaps", "需要补强"),
    ("prep.item.research", "了解公司和产品"),
    ("prep.item.stories", "准备三个 STAR 案例"),
    ("prep.item.skills", "复习岗位要求的技能"),
    ("prep.item.questions", "准备向面试官提的问题"),
    ("prep.item.salary", "了解薪资范围"),
];

/// Static lookup table for one language
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    entries: &'static [(&'static str, &'static str)],
}

impl Catalog {
    /// Catalog for a language code; anything unknown gets English
    pub fn for_language(code: &str) -> Self {
        let entries = match code {
            "zh" => ZH,
            _ => EN,
        };
        Self { entries }
    }
}

impl Translator for Catalog {
    fn resolve(&self, key: &str) -> String {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, text)| text.to_string())
            .unwrap_or_else(|| key.to_string())
    }
}

/// Reactive translation handle provided via context
#[derive(Clone, Copy)]
pub struct I18n {
    pub language: RwSignal<String>,
}

impl I18n {
    pub fn new(language: &str) -> Self {
        Self {
            language: RwSignal::new(language.to_string()),
        }
    }

    /// Translate `key` in the current language (tracks the language signal)
    pub fn t(&self, key: &str) -> String {
        Catalog::for_language(&self.language.get()).resolve(key)
    }
}

/// Get the translation handle from context
pub fn use_i18n() -> I18n {
    expect_context::<I18n>()
}

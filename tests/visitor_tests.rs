//! Library tests for staff traversal and the CTO report

use staff_report::{
    CtoVisitor, Engineer, Grade, Manager, SharedVisitor, Staff, StaffManager, StaffMember,
    Visitor,
};

/// The six-member team from the bundled sample roster, built by hand
fn sample_team() -> StaffManager {
    let mut sm = StaffManager::new();

    let mut m1 = Manager::new("张三");
    m1.requirement_num = 5;
    let mut m2 = Manager::new("李四");
    m2.requirement_num = 15;
    let mut m3 = Manager::new("王麻子");
    m3.requirement_num = 25;
    sm.add(m1);
    sm.add(m2);
    sm.add(m3);

    let mut e1 = Engineer::new("小明");
    e1.code_num = 600;
    let mut e2 = Engineer::new("小红");
    e2.code_num = 6000;
    let mut e3 = Engineer::new("小王");
    e3.code_num = 60000;
    sm.add(e1);
    sm.add(e2);
    sm.add(e3);

    sm
}

/// Counts visits per kind; a second report that needs no staff changes
#[derive(Default)]
struct Headcount {
    engineers: usize,
    managers: usize,
    order: Vec<String>,
}

impl Visitor for Headcount {
    fn visit_engineer(&mut self, engineer: &Engineer) {
        self.engineers += 1;
        self.order.push(engineer.name().to_string());
    }

    fn visit_manager(&mut self, manager: &Manager) {
        self.managers += 1;
        self.order.push(manager.name().to_string());
    }
}

#[test]
fn test_sample_team_report() {
    let team = sample_team();
    let mut cto = CtoVisitor::new();
    team.accept(&mut [&mut cto]);

    assert_eq!(
        cto.performances(),
        &[
            "产品经理:张三 需求量:5 评级:D".to_string(),
            "产品经理:李四 需求量:15 评级:C".to_string(),
            "产品经理:王麻子 需求量:25 评级:B".to_string(),
            "工程师:小明 代码量:600 评级:D".to_string(),
            "工程师:小红 代码量:6000 评级:C".to_string(),
            "工程师:小王 代码量:60000 评级:B".to_string(),
        ]
    );
}

#[test]
fn test_matches_bundled_sample_roster() {
    let from_roster = StaffManager::from(staff_report::Roster::sample().unwrap());
    let by_hand = sample_team();

    let mut a = CtoVisitor::new();
    let mut b = CtoVisitor::new();
    from_roster.accept(&mut [&mut a]);
    by_hand.accept(&mut [&mut b]);

    assert_eq!(a.gen_report(), b.gen_report());
}

#[test]
fn test_multiple_visitors_keep_staff_order() {
    let team = sample_team();
    let mut first = CtoVisitor::new();
    let mut second = CtoVisitor::new();
    let mut headcount = Headcount::default();

    team.accept(&mut [&mut first, &mut headcount, &mut second]);

    assert_eq!(first.gen_report(), second.gen_report());
    assert_eq!(first.performances().len(), team.len());
    assert_eq!(headcount.managers, 3);
    assert_eq!(headcount.engineers, 3);
    assert_eq!(
        headcount.order,
        vec!["张三", "李四", "王麻子", "小明", "小红", "小王"]
    );
}

#[test]
fn test_repeated_traversal_appends() {
    let team = sample_team();
    let mut cto = CtoVisitor::new();
    team.accept(&mut [&mut cto]);
    team.accept(&mut [&mut cto]);

    let lines = cto.performances();
    assert_eq!(lines.len(), 12);
    assert_eq!(lines[..6], lines[6..]);
}

#[test]
fn test_zero_visitors() {
    let team = sample_team();
    let cto = CtoVisitor::new();
    team.accept(&mut []);
    assert_eq!(cto.gen_report(), "");
}

#[test]
fn test_fresh_visitor_report_is_empty() {
    assert_eq!(CtoVisitor::new().gen_report(), "");
}

#[test]
fn test_boundary_gaps() {
    let mut sm = StaffManager::new();
    sm.add(Engineer::new("e").with_code_num(100_000));
    sm.add(Manager::new("m").with_requirement_num(30));

    let mut cto = CtoVisitor::new();
    sm.accept(&mut [&mut cto]);

    assert_eq!(
        cto.gen_report(),
        "工程师:e 代码量:100000 评级:D\n产品经理:m 需求量:30 评级:D"
    );
    assert_eq!(Grade::for_code_num(100_000), Grade::D);
    assert_eq!(Grade::for_requirement_num(30), Grade::D);
}

#[test]
fn test_dispatch_through_trait_objects() {
    let members: Vec<Box<dyn Staff>> = vec![
        Box::new(Engineer::new("小红").with_code_num(6000)),
        Box::new(Manager::new("李四").with_requirement_num(15)),
        Box::new(StaffMember::from(Engineer::new("小王").with_code_num(200_000))),
    ];

    let mut cto = CtoVisitor::new();
    for member in &members {
        member.accept(&mut cto);
    }

    assert_eq!(
        cto.gen_report(),
        "工程师:小红 代码量:6000 评级:C\n\
         产品经理:李四 需求量:15 评级:C\n\
         工程师:小王 代码量:200000 评级:A"
    );
}

#[test]
fn test_shared_visitor_across_threads() {
    let teams: Vec<StaffManager> = (0..4).map(|_| sample_team()).collect();
    let shared = SharedVisitor::new(CtoVisitor::new());

    std::thread::scope(|scope| {
        for team in &teams {
            let mut handle = shared.clone();
            scope.spawn(move || team.accept(&mut [&mut handle]));
        }
    });

    let cto = shared.lock();
    assert_eq!(cto.performances().len(), 24);
    assert_eq!(
        cto.performances()
            .iter()
            .filter(|line| line.ends_with("评级:B"))
            .count(),
        8
    );
}

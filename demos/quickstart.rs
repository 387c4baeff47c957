use chrono::{TimeDelta, Utc};
use worktime::{WorkHours, WorkPeriod};

fn main() {
    let now = WorkPeriod::standard(Utc::now());
    println!("now:          {now}");
    println!("office hours: {}", now.during_office_hours());
    println!("from start:   {} min", now.from_start().num_minutes());
    println!("next start:   {}", now.next_work_day_start());

    let night: WorkHours = "19:00 - 03:00".parse().expect("valid window");
    let shift = WorkPeriod::with_hours(*now.instant(), night);
    println!("night shift:  {shift} lasts {}", shift.length_hours());
    println!("in 12h:       {}", shift + TimeDelta::hours(12));
}

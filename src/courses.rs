use anyhow::Result;
use course_rag_core::engine::CourseEngine;

pub fn list_courses(engine: &CourseEngine) -> Result<()> {
    let courses = engine.list_courses();
    if courses.is_empty() {
        println!("No courses loaded.");
        return Ok(());
    }

    println!("{:<16} {:>6}  TITLE", "ID", "CHUNKS");
    for course in courses {
        println!("{:<16} {:>6}  {}", course.id, course.num_chunks, course.title);
    }

    Ok(())
}

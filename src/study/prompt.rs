//! Prompt builders for the five study operations.
//!
//! Each builder interpolates the reference document and prior artifacts
//! verbatim into a fixed Spanish instructional template — no escaping, no
//! truncation. The templates are the product surface of this application;
//! changing their wording changes what learners get.

/// Prompt for synthesizing a case study from the reference document.
pub fn case_study_prompt(reference: &str) -> String {
    format!(
        r#"Basándote en la siguiente norma ISO:

"""{reference}"""

Genera un caso de estudio realista y detallado sobre una empresa ficticia
que necesita implementar esta norma ISO. El caso debe incluir:

1. Descripción de la empresa (tamaño, sector, ubicación)
2. Situación actual y problemas que enfrenta
3. Necesidad específica de implementar la norma ISO
4. Contexto adicional relevante para el caso

El caso debe ser didáctico y plantear un escenario que permita aplicar
los conceptos clave de la norma.
"#
    )
}

/// Prompt for drafting an implementation plan for the current case.
pub fn plan_prompt(reference: &str, case: &str) -> String {
    format!(
        r#"Basándote en la siguiente norma ISO:

"""{reference}"""

Y considerando el siguiente caso de estudio:

"""{case}"""

Desarrolla una planificación detallada para implementar la norma ISO en este caso.
La planificación debe incluir:

1. Objetivos claros y medibles
2. Etapas de implementación con cronograma sugerido
3. Recursos necesarios (humanos, técnicos, financieros)
4. Indicadores para medir el progreso y éxito
5. Consideraciones importantes y posibles obstáculos

Estructura la planificación de manera clara y práctica para que pueda ser implementada.
"#
    )
}

/// Prompt for drafting the reference solution to the current case.
pub fn solution_prompt(reference: &str, case: &str) -> String {
    format!(
        r#"Basándote en la siguiente norma ISO:

"""{reference}"""

Y considerando el siguiente caso de estudio:

"""{case}"""

Desarrolla una solución completa y detallada que siga las mejores prácticas
para implementar la norma ISO en este caso específico. Incluye:

1. Estrategia de implementación paso a paso
2. Documentación necesaria a desarrollar
3. Procesos a establecer o modificar
4. Mecanismos de seguimiento y evaluación
5. Medidas para asegurar la mejora continua

Esta solución servirá como referencia ideal para comparar con la respuesta
del usuario.
"#
    )
}

/// Prompt for scoring the learner's answer against the reference solution.
///
/// The model is asked to lead with a 0–100 similarity percentage; the
/// similarity extractor scrapes that number back out of the reply.
pub fn comparison_prompt(
    reference: &str,
    user_answer: &str,
    solution: &str,
    case: &str,
) -> String {
    format!(
        r#"Basándote en la siguiente norma ISO:

"""{reference}"""

Compara la siguiente respuesta del usuario:

"""{user_answer}"""

Con esta solución de referencia:

"""{solution}"""

Para el siguiente caso de estudio:

"""{case}"""

Realiza un análisis detallado que incluya:

1. Porcentaje de similitud conceptual (expresado como un número del 0 al 100)
2. Aspectos bien abordados en la respuesta del usuario
3. Elementos faltantes o insuficientes
4. Enfoques diferentes pero válidos (si los hay)
5. Evalúa qué tanto se apega la respuesta del usuario al contenido del documento ISO

Presenta los resultados de manera estructurada y constructiva.
"#
    )
}

/// Prompt for improvement recommendations after a comparison.
pub fn recommendations_prompt(
    reference: &str,
    case: &str,
    user_answer: &str,
    comparison: &str,
) -> String {
    format!(
        r#"Basándote en la siguiente norma ISO:

"""{reference}"""

Y considerando:

1. El caso de estudio: """{case}"""
2. La respuesta del usuario: """{user_answer}"""
3. El resultado de la comparación: """{comparison}"""

Proporciona recomendaciones detalladas y prácticas para mejorar la implementación
propuesta por el usuario. Las recomendaciones deben:

1. Ser específicas y accionables
2. Centrarse en la mejora continua
3. Referirse a secciones específicas de la norma ISO cuando sea relevante
4. Ofrecer recursos adicionales o herramientas que podrían ser útiles
5. Sugerir indicadores para medir el progreso de las mejoras

Estructura las recomendaciones de manera clara y positiva, reconociendo los
puntos fuertes del trabajo del usuario.
"#
    )
}
